//! Interview record HTTP handlers.
//!
//! ```text
//! POST   /api/v1/records/interview
//! GET    /api/v1/records/interview/{interviewRecordId}
//! PUT    /api/v1/records/interview/{interviewRecordId}
//! DELETE /api/v1/records/interview/{interviewRecordId}
//! POST   /api/v1/records/interview/{interviewRecordId}/details
//! PUT    /api/v1/records/interview/{interviewRecordId}/details/{detailIndex}
//! DELETE /api/v1/records/interview/{interviewRecordId}/details/{detailIndex}
//! GET    /api/v1/records/sidebar
//! ```
//!
//! Detail indexes are positional: deleting a detail shifts its successors
//! down, so clients must refresh before addressing by index again.

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, InterviewRecordDraft, InterviewRecordSummary, InterviewRecordView, RecordDetail,
    RecordDetailDraft,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid, require_non_blank};

/// Request payload naming an interview (enterprise and round).
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecordBody {
    #[schema(example = "Acme")]
    pub enterprise_name: String,
    #[schema(example = "1st interview")]
    pub category: String,
}

/// Request payload for one question/answer pair.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetailBody {
    #[schema(example = "Why do you want to join?")]
    pub question: String,
    #[schema(example = "The team ships weekly.")]
    pub answer: String,
}

/// Response payload for a full interview record.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecordResponse {
    #[schema(format = "uuid")]
    pub interview_record_id: String,
    pub enterprise_name: String,
    pub category: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
    pub details: Vec<RecordDetailResponse>,
}

/// Response payload for a single question/answer pair.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetailResponse {
    pub question: String,
    pub answer: String,
}

/// Sidebar projection of an interview record without its details.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SidebarEntryResponse {
    #[schema(format = "uuid")]
    pub interview_record_id: String,
    pub enterprise_name: String,
    pub category: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<InterviewRecordView> for InterviewRecordResponse {
    fn from(view: InterviewRecordView) -> Self {
        Self {
            interview_record_id: view.interview_record_id.to_string(),
            enterprise_name: view.enterprise_name,
            category: view.category,
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
            details: view
                .details
                .into_iter()
                .map(RecordDetailResponse::from)
                .collect(),
        }
    }
}

impl From<RecordDetail> for RecordDetailResponse {
    fn from(detail: RecordDetail) -> Self {
        Self {
            question: detail.question,
            answer: detail.answer,
        }
    }
}

impl From<InterviewRecordSummary> for SidebarEntryResponse {
    fn from(summary: InterviewRecordSummary) -> Self {
        Self {
            interview_record_id: summary.interview_record_id.to_string(),
            enterprise_name: summary.enterprise_name,
            category: summary.category,
            created_at: summary.created_at.to_rfc3339(),
            updated_at: summary.updated_at.to_rfc3339(),
        }
    }
}

fn parse_interview_record_body(body: InterviewRecordBody) -> Result<InterviewRecordDraft, Error> {
    require_non_blank(&body.enterprise_name, FieldName::new("enterpriseName"))?;
    require_non_blank(&body.category, FieldName::new("category"))?;
    Ok(InterviewRecordDraft {
        enterprise_name: body.enterprise_name,
        category: body.category,
    })
}

fn parse_record_detail_body(body: RecordDetailBody) -> Result<RecordDetailDraft, Error> {
    require_non_blank(&body.question, FieldName::new("question"))?;
    require_non_blank(&body.answer, FieldName::new("answer"))?;
    Ok(RecordDetailDraft {
        question: body.question,
        answer: body.answer,
    })
}

fn parse_record_id(raw: &str) -> Result<uuid::Uuid, Error> {
    parse_uuid(raw, FieldName::new("interviewRecordId"))
}

/// Create an interview record for the authenticated user.
#[utoipa::path(
    post,
    path = "/api/v1/records/interview",
    request_body = InterviewRecordBody,
    responses(
        (status = 201, description = "Interview record created", body = InterviewRecordResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "createInterviewRecord",
    security(("bearer_token" = []))
)]
#[post("/records/interview")]
pub async fn create_interview_record(
    state: web::Data<HttpState>,
    auth: AuthContext,
    payload: web::Json<InterviewRecordBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_interview_record_body(payload.into_inner())?;

    let view = state
        .records
        .create_interview_record(auth.user_id(), draft)
        .await?;

    Ok(HttpResponse::Created().json(InterviewRecordResponse::from(view)))
}

/// Fetch one interview record with a page of its details.
///
/// A `page`/`size` window past the end of the detail list yields an empty
/// `details` array, not a 404; only a missing record is a 404.
#[utoipa::path(
    get,
    path = "/api/v1/records/interview/{interviewRecordId}",
    params(
        ("interviewRecordId" = String, Path, description = "Interview record identifier"),
        ("page" = Option<u32>, Query, description = "Zero-based detail page, default 0"),
        ("size" = Option<u32>, Query, description = "Details per page, default 10")
    ),
    responses(
        (status = 200, description = "Interview record with windowed details", body = InterviewRecordResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "getInterviewRecord",
    security(("bearer_token" = []))
)]
#[get("/records/interview/{interviewRecordId}")]
pub async fn get_interview_record(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    page: web::Query<PageRequest>,
) -> ApiResult<web::Json<InterviewRecordResponse>> {
    let interview_record_id = parse_record_id(&path.into_inner())?;

    let view = state
        .records_query
        .get_interview_record_by_id(auth.user_id(), interview_record_id, page.into_inner())
        .await?;

    Ok(web::Json(InterviewRecordResponse::from(view)))
}

/// Replace an interview record's enterprise name and category.
///
/// Returns the refreshed record with its full, unpaginated detail list.
#[utoipa::path(
    put,
    path = "/api/v1/records/interview/{interviewRecordId}",
    request_body = InterviewRecordBody,
    params(
        ("interviewRecordId" = String, Path, description = "Interview record identifier")
    ),
    responses(
        (status = 200, description = "Interview record updated", body = InterviewRecordResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "updateInterviewRecord",
    security(("bearer_token" = []))
)]
#[put("/records/interview/{interviewRecordId}")]
pub async fn update_interview_record(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    payload: web::Json<InterviewRecordBody>,
) -> ApiResult<web::Json<InterviewRecordResponse>> {
    let interview_record_id = parse_record_id(&path.into_inner())?;
    let draft = parse_interview_record_body(payload.into_inner())?;

    let view = state
        .records
        .update_interview_record(auth.user_id(), interview_record_id, draft)
        .await?;

    Ok(web::Json(InterviewRecordResponse::from(view)))
}

/// Delete an interview record and all of its details.
#[utoipa::path(
    delete,
    path = "/api/v1/records/interview/{interviewRecordId}",
    params(
        ("interviewRecordId" = String, Path, description = "Interview record identifier")
    ),
    responses(
        (status = 204, description = "Interview record deleted"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "deleteInterviewRecord",
    security(("bearer_token" = []))
)]
#[delete("/records/interview/{interviewRecordId}")]
pub async fn delete_interview_record(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let interview_record_id = parse_record_id(&path.into_inner())?;

    let deleted = state
        .records
        .delete_interview_record(auth.user_id(), interview_record_id)
        .await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(format!(
            "interview record {interview_record_id} not found"
        )))
    }
}

/// Append a question/answer detail to an interview record.
#[utoipa::path(
    post,
    path = "/api/v1/records/interview/{interviewRecordId}/details",
    request_body = RecordDetailBody,
    params(
        ("interviewRecordId" = String, Path, description = "Interview record identifier")
    ),
    responses(
        (status = 201, description = "Record detail appended", body = RecordDetailResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "createRecordDetail",
    security(("bearer_token" = []))
)]
#[post("/records/interview/{interviewRecordId}/details")]
pub async fn create_record_detail(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    payload: web::Json<RecordDetailBody>,
) -> ApiResult<HttpResponse> {
    let interview_record_id = parse_record_id(&path.into_inner())?;
    let draft = parse_record_detail_body(payload.into_inner())?;

    let detail = state
        .records
        .create_record_detail(auth.user_id(), interview_record_id, draft)
        .await?;

    Ok(HttpResponse::Created().json(RecordDetailResponse::from(detail)))
}

/// Replace the question and answer of one detail, addressed by position.
#[utoipa::path(
    put,
    path = "/api/v1/records/interview/{interviewRecordId}/details/{detailIndex}",
    request_body = RecordDetailBody,
    params(
        ("interviewRecordId" = String, Path, description = "Interview record identifier"),
        ("detailIndex" = i64, Path, description = "Zero-based detail position")
    ),
    responses(
        (status = 200, description = "Record detail updated", body = RecordDetailResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "updateRecordDetail",
    security(("bearer_token" = []))
)]
#[put("/records/interview/{interviewRecordId}/details/{detailIndex}")]
pub async fn update_record_detail(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<(String, i64)>,
    payload: web::Json<RecordDetailBody>,
) -> ApiResult<web::Json<RecordDetailResponse>> {
    let (raw_id, detail_index) = path.into_inner();
    let interview_record_id = parse_record_id(&raw_id)?;
    let draft = parse_record_detail_body(payload.into_inner())?;

    let detail = state
        .records
        .update_record_detail(auth.user_id(), interview_record_id, detail_index, draft)
        .await?;

    Ok(web::Json(RecordDetailResponse::from(detail)))
}

/// Remove one detail, addressed by position.
#[utoipa::path(
    delete,
    path = "/api/v1/records/interview/{interviewRecordId}/details/{detailIndex}",
    params(
        ("interviewRecordId" = String, Path, description = "Interview record identifier"),
        ("detailIndex" = i64, Path, description = "Zero-based detail position")
    ),
    responses(
        (status = 204, description = "Record detail deleted"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "deleteRecordDetail",
    security(("bearer_token" = []))
)]
#[delete("/records/interview/{interviewRecordId}/details/{detailIndex}")]
pub async fn delete_record_detail(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<(String, i64)>,
) -> ApiResult<HttpResponse> {
    let (raw_id, detail_index) = path.into_inner();
    let interview_record_id = parse_record_id(&raw_id)?;

    let deleted = state
        .records
        .delete_record_detail(auth.user_id(), interview_record_id, detail_index)
        .await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(format!(
            "record detail at index {detail_index} not found"
        )))
    }
}

/// List the authenticated user's records without their details.
///
/// Returns an empty array, not a 404, for users who have never stored a
/// record.
#[utoipa::path(
    get,
    path = "/api/v1/records/sidebar",
    responses(
        (status = 200, description = "Sidebar entries in creation order", body = [SidebarEntryResponse]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["records"],
    operation_id = "getSidebarData",
    security(("bearer_token" = []))
)]
#[get("/records/sidebar")]
pub async fn get_sidebar_data(
    state: web::Data<HttpState>,
    auth: AuthContext,
) -> ApiResult<web::Json<Vec<SidebarEntryResponse>>> {
    let summaries = state.records_query.get_sidebar_data(auth.user_id()).await?;

    Ok(web::Json(summaries.into_iter().map(SidebarEntryResponse::from).collect()))
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
