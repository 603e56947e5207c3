//! Tests for error construction, validation, and trace capture.

use rstest::rstest;
use serde_json::json;

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("no auth"), ErrorCode::Unauthorized)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_the_expected_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::invalid_request("bad").try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn trace_id_is_none_outside_a_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn constructors_capture_the_ambient_trace_id() {
    let trace_id: TraceId = TRACE_ID.parse().expect("constant is a valid UUID");
    let error = trace_id
        .scope(async { Error::not_found("interview record not found") })
        .await;

    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[tokio::test]
async fn deserialisation_keeps_the_payload_trace_id_not_the_ambient_one() {
    let trace_id: TraceId = TRACE_ID.parse().expect("constant is a valid UUID");
    let error = trace_id
        .scope(async {
            serde_json::from_value::<Error>(json!({
                "code": "invalid_request",
                "message": "bad",
            }))
            .expect("payload without a trace id deserialises")
        })
        .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let result = serde_json::from_value::<Error>(json!({
        "code": "invalid_request",
        "message": "   ",
    }));
    assert!(result.is_err());
}

#[rstest]
fn serialises_in_camel_case_and_omits_absent_fields() {
    let error = Error::invalid_request("bad");
    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(value, json!({ "code": "invalid_request", "message": "bad" }));
}

#[rstest]
fn serialises_trace_id_and_details_when_present() {
    let error = Error::invalid_request("bad")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "field": "question" }));
    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "traceId": TRACE_ID,
            "details": { "field": "question" },
        })
    );
}

#[rstest]
fn round_trips_through_the_wire_form() {
    let original = Error::not_found("missing")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "interviewRecordId": "x" }));
    let value = serde_json::to_value(&original).expect("error serialises");
    let restored: Error = serde_json::from_value(value).expect("error deserialises");

    assert_eq!(restored, original);
}
