//! Persistence adapters for the record book repository port.
//!
//! The adapters here translate between domain aggregates and their stored
//! representation. Repository implementations stay thin: semantics live in
//! the domain services, storage details live here.

mod memory;

pub use memory::InMemoryRecordBookRepository;
