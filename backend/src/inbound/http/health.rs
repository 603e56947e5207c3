//! Health endpoint for orchestration and load balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Error;

use super::ApiResult;

/// Shared health state. The server flips `ready` once its dependencies are
/// initialised; until then the probe reports `503`.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Create a new health state starting as not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready to handle traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

/// Body returned by a passing health probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the probe passes.
    #[schema(example = "ok")]
    status: String,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}

/// Health probe. Returns 200 once dependencies are initialised and the
/// server can handle traffic; 503 otherwise. Requires no authentication.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tags = ["health"],
    operation_id = "healthCheck",
    security([]),
    responses(
        (status = 200, description = "Service is ready to handle traffic", body = HealthResponse),
        (status = 503, description = "Service is not ready", body = Error)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> ApiResult<HttpResponse> {
    if state.is_ready() {
        Ok(HttpResponse::Ok()
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(HealthResponse::ok()))
    } else {
        Err(Error::service_unavailable("service is not ready"))
    }
}
