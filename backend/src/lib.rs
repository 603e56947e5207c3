//! Backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// OpenAPI document served by Swagger UI and exported by tooling.
pub use doc::ApiDoc;
/// Request-scoped trace identifier, re-exported for handler and test code.
pub use domain::TraceId;
/// Request tracing middleware applied by the HTTP server.
pub use middleware::trace::Trace;
