//! Tests for interview record HTTP handlers.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test, web};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::RecordService;
use crate::domain::ports::{MockRecordBookRepository, RecordBookRepositoryError};
use crate::outbound::persistence::InMemoryRecordBookRepository;
use crate::test_support::MutableClock;

fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn test_clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::new(start_time()))
}

fn test_app_with_state(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .service(create_interview_record)
            .service(get_interview_record)
            .service(update_interview_record)
            .service(delete_interview_record)
            .service(create_record_detail)
            .service(update_record_detail)
            .service(delete_record_detail)
            .service(get_sidebar_data),
    )
}

fn in_memory_app(
    clock: Arc<MutableClock>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repo = Arc::new(InMemoryRecordBookRepository::new());
    let service = Arc::new(RecordService::new(repo, clock));
    test_app_with_state(HttpState::new(service.clone(), service))
}

fn authorization(user: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({"client_id": user}).to_string());
    let signature = URL_SAFE_NO_PAD.encode("unverified");
    format!("Bearer {header}.{payload}.{signature}")
}

async fn create_record(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    user: &str,
    enterprise_name: &str,
    category: &str,
) -> Value {
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/records/interview")
        .insert_header((header::AUTHORIZATION, authorization(user)))
        .set_json(json!({"enterpriseName": enterprise_name, "category": category}))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    actix_test::read_body_json(response).await
}

async fn add_detail(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    user: &str,
    record_id: &str,
    question: &str,
    answer: &str,
) {
    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/records/interview/{record_id}/details"))
        .insert_header((header::AUTHORIZATION, authorization(user)))
        .set_json(json!({"question": question, "answer": answer}))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn get_record(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    user: &str,
    record_id: &str,
    query: &str,
) -> actix_web::dev::ServiceResponse {
    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/records/interview/{record_id}{query}"))
        .insert_header((header::AUTHORIZATION, authorization(user)))
        .to_request();
    actix_test::call_service(app, request).await
}

fn record_id(body: &Value) -> String {
    body.get("interviewRecordId")
        .and_then(Value::as_str)
        .expect("interviewRecordId in response")
        .to_owned()
}

fn questions(body: &Value) -> Vec<&str> {
    body.get("details")
        .and_then(Value::as_array)
        .expect("details in response")
        .iter()
        .map(|detail| {
            detail
                .get("question")
                .and_then(Value::as_str)
                .expect("question in detail")
        })
        .collect()
}

#[actix_web::test]
async fn create_interview_record_returns_the_created_record() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;

    let body = create_record(&app, "user-1", "Acme", "1st interview").await;

    assert_eq!(body.get("enterpriseName"), Some(&json!("Acme")));
    assert_eq!(body.get("category"), Some(&json!("1st interview")));
    assert_eq!(body.get("details"), Some(&json!([])));
    assert!(uuid::Uuid::parse_str(&record_id(&body)).is_ok());
    assert_eq!(body.get("createdAt"), body.get("updatedAt"));
}

#[actix_web::test]
async fn create_interview_record_rejects_blank_enterprise_name() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/records/interview")
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .set_json(json!({"enterpriseName": "   ", "category": "1st interview"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(
        body.get("details"),
        Some(&json!({"field": "enterpriseName", "code": "blank_field"}))
    );
}

#[actix_web::test]
async fn record_endpoints_require_a_bearer_token() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;

    let create = actix_test::TestRequest::post()
        .uri("/api/v1/records/interview")
        .set_json(json!({"enterpriseName": "Acme", "category": "1st interview"}))
        .to_request();
    let sidebar = actix_test::TestRequest::get()
        .uri("/api/v1/records/sidebar")
        .to_request();

    assert_eq!(
        actix_test::call_service(&app, create).await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        actix_test::call_service(&app, sidebar).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn get_interview_record_windows_details() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);
    for n in 0..3 {
        add_detail(&app, "user-1", &id, &format!("Q{n}"), &format!("A{n}")).await;
    }

    let response = get_record(&app, "user-1", &id, "?page=1&size=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(questions(&body), ["Q2"]);

    let response = get_record(&app, "user-1", &id, "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(questions(&body), ["Q0", "Q1", "Q2"]);
}

#[actix_web::test]
async fn get_interview_record_window_past_the_end_is_empty_not_missing() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);
    add_detail(&app, "user-1", &id, "Q0", "A0").await;

    let response = get_record(&app, "user-1", &id, "?page=7&size=10").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("details"), Some(&json!([])));
    assert_eq!(body.get("enterpriseName"), Some(&json!("Acme")));
}

#[actix_web::test]
async fn get_interview_record_for_unknown_id_is_not_found() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;

    let response = get_record(
        &app,
        "user-1",
        "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code"), Some(&json!("not_found")));
}

#[actix_web::test]
async fn get_interview_record_rejects_a_malformed_id() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;

    let response = get_record(&app, "user-1", "not-a-uuid", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("details"),
        Some(&json!({
            "field": "interviewRecordId",
            "value": "not-a-uuid",
            "code": "invalid_uuid",
        }))
    );
}

#[actix_web::test]
async fn update_interview_record_replaces_fields_and_returns_every_detail() {
    let clock = test_clock();
    let app = actix_test::init_service(in_memory_app(clock.clone())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);
    add_detail(&app, "user-1", &id, "Q0", "A0").await;
    add_detail(&app, "user-1", &id, "Q1", "A1").await;

    clock.advance_seconds(5);
    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/records/interview/{id}"))
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .set_json(json!({"enterpriseName": "Initech", "category": "2nd interview"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("enterpriseName"), Some(&json!("Initech")));
    assert_eq!(body.get("category"), Some(&json!("2nd interview")));
    assert_eq!(questions(&body), ["Q0", "Q1"]);
    assert_eq!(body.get("createdAt"), created.get("createdAt"));
    assert_eq!(
        body.get("updatedAt"),
        Some(&json!("2026-03-14T09:00:05+00:00"))
    );
}

#[actix_web::test]
async fn update_interview_record_for_unknown_id_is_not_found() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/v1/records/interview/3fa85f64-5717-4562-b3fc-2c963f66afa6")
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .set_json(json!({"enterpriseName": "Initech", "category": "2nd interview"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_interview_record_reports_misses_with_not_found() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);

    let delete = |id: String| {
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/records/interview/{id}"))
            .insert_header((header::AUTHORIZATION, authorization("user-1")))
            .to_request()
    };

    let first = actix_test::call_service(&app, delete(id.clone())).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = actix_test::call_service(&app, delete(id)).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let sidebar = actix_test::TestRequest::get()
        .uri("/api/v1/records/sidebar")
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .to_request();
    let response = actix_test::call_service(&app, sidebar).await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn create_record_detail_appends_and_echoes_the_detail() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/records/interview/{id}/details"))
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .set_json(json!({"question": "Q0", "answer": "A0"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"question": "Q0", "answer": "A0"}));

    let response = get_record(&app, "user-1", &id, "").await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(questions(&body), ["Q0"]);
}

#[actix_web::test]
async fn create_record_detail_for_unknown_record_is_not_found() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/records/interview/3fa85f64-5717-4562-b3fc-2c963f66afa6/details")
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .set_json(json!({"question": "Q0", "answer": "A0"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_record_detail_replaces_the_addressed_entry() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);
    add_detail(&app, "user-1", &id, "Q0", "A0").await;
    add_detail(&app, "user-1", &id, "Q1", "A1").await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/records/interview/{id}/details/1"))
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .set_json(json!({"question": "Q1-revised", "answer": "A1-revised"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"question": "Q1-revised", "answer": "A1-revised"}));

    let response = get_record(&app, "user-1", &id, "").await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(questions(&body), ["Q0", "Q1-revised"]);
}

#[rstest]
#[case::index_at_len(1)]
#[case::index_far_past_len(40)]
#[case::negative_index(-1)]
#[actix_web::test]
async fn update_record_detail_out_of_range_is_not_found(#[case] index: i64) {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);
    add_detail(&app, "user-1", &id, "Q0", "A0").await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/records/interview/{id}/details/{index}"))
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .set_json(json!({"question": "Qx", "answer": "Ax"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_record(&app, "user-1", &id, "").await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(questions(&body), ["Q0"]);
}

#[actix_web::test]
async fn non_numeric_detail_index_is_a_bad_request() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/records/interview/{id}/details/first"))
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_record_detail_shifts_later_entries_down() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);
    for n in 0..3 {
        add_detail(&app, "user-1", &id, &format!("Q{n}"), &format!("A{n}")).await;
    }

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/records/interview/{id}/details/0"))
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_record(&app, "user-1", &id, "").await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(questions(&body), ["Q1", "Q2"]);
}

#[rstest]
#[case::index_at_len(1)]
#[case::negative_index(-3)]
#[actix_web::test]
async fn delete_record_detail_out_of_range_is_not_found(#[case] index: i64) {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);
    add_detail(&app, "user-1", &id, "Q0", "A0").await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/records/interview/{id}/details/{index}"))
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn sidebar_lists_records_in_creation_order_without_details() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let first = create_record(&app, "user-1", "Acme", "1st interview").await;
    create_record(&app, "user-1", "Globex", "screening").await;
    add_detail(&app, "user-1", &record_id(&first), "Q0", "A0").await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/records/sidebar")
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let entries = body.as_array().expect("sidebar array");
    let names: Vec<&str> = entries
        .iter()
        .map(|entry| {
            entry
                .get("enterpriseName")
                .and_then(Value::as_str)
                .expect("enterpriseName in entry")
        })
        .collect();
    assert_eq!(names, ["Acme", "Globex"]);
    assert!(entries.iter().all(|entry| entry.get("details").is_none()));
}

#[actix_web::test]
async fn users_only_see_their_own_records() {
    let app = actix_test::init_service(in_memory_app(test_clock())).await;
    let created = create_record(&app, "user-1", "Acme", "1st interview").await;
    let id = record_id(&created);

    let response = get_record(&app, "user-2", &id, "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let sidebar = actix_test::TestRequest::get()
        .uri("/api/v1/records/sidebar")
        .insert_header((header::AUTHORIZATION, authorization("user-2")))
        .to_request();
    let response = actix_test::call_service(&app, sidebar).await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn repository_failures_surface_as_service_unavailable() {
    let mut repo = MockRecordBookRepository::new();
    repo.expect_find_by_user_id()
        .returning(|_| Err(RecordBookRepositoryError::connection("store offline")));
    let service = Arc::new(RecordService::new(Arc::new(repo), test_clock()));
    let app = actix_test::init_service(test_app_with_state(HttpState::new(
        service.clone(),
        service,
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/records/sidebar")
        .insert_header((header::AUTHORIZATION, authorization("user-1")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code"), Some(&json!("service_unavailable")));
}
