//! OpenAPI document for the record service.
//!
//! [`ApiDoc`] collects every HTTP endpoint, the request and response
//! schemas, the error envelope, and the bearer token security scheme into
//! one generated specification. Debug builds serve it through Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::records::{
    InterviewRecordBody, InterviewRecordResponse, RecordDetailBody, RecordDetailResponse,
    SidebarEntryResponse,
};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Gateway-issued JWT; the payload's client_id claim names the caller.",
                    ))
                    .build(),
            ),
        );
    }
}

/// Generated OpenAPI description of the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Interview record API",
        description = "HTTP interface for interview preparation records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("bearer_token" = [])),
    paths(
        crate::inbound::http::records::create_interview_record,
        crate::inbound::http::records::get_interview_record,
        crate::inbound::http::records::update_interview_record,
        crate::inbound::http::records::delete_interview_record,
        crate::inbound::http::records::create_record_detail,
        crate::inbound::http::records::update_record_detail,
        crate::inbound::http::records::delete_record_detail,
        crate::inbound::http::records::get_sidebar_data,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        InterviewRecordBody,
        RecordDetailBody,
        InterviewRecordResponse,
        RecordDetailResponse,
        SidebarEntryResponse,
        HealthResponse,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "records", description = "Interview preparation records and their details"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
