//! Request validation for the record endpoints.
//!
//! Failures become `invalid_request` envelopes whose `details` object names
//! the offending field with its wire spelling, a stable `code`, and, where
//! it helps the caller, the rejected value.

use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Wire spelling of a request field, as the client sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

/// Reject values that are empty or contain only whitespace. Accepted values
/// pass through untrimmed.
pub(crate) fn require_non_blank(value: &str, field: FieldName) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(blank_field_error(field));
    }
    Ok(())
}

fn blank_field_error(FieldName(field): FieldName) -> Error {
    Error::invalid_request(format!("{field} must not be blank")).with_details(json!({
        "field": field,
        "code": "blank_field",
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

fn invalid_uuid_error(FieldName(field): FieldName, value: &str) -> Error {
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}
