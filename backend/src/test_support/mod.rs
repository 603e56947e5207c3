//! Shared test doubles for unit and integration tests.
//!
//! Compiled for the crate's own tests and, behind the `test-support`
//! feature, for integration tests and downstream harnesses.

mod clock;

pub use clock::MutableClock;
