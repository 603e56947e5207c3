//! Outbound adapters implementing domain ports for infrastructure.
//!
//! Adapters are thin translators between domain types and whatever backs
//! them. They contain no business logic; the domain services own semantics
//! and adapters own storage.

pub mod persistence;
