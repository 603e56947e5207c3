//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod records;
pub mod state;
pub mod validation;

pub use error::ApiResult;
