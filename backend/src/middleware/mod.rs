//! Middleware applied to every request.
//!
//! Currently hosts request tracing; other cross-cutting concerns would be
//! added here.

pub mod trace;

pub use trace::Trace;
