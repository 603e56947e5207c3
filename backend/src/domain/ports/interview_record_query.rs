//! Driving port for interview record reads.

use async_trait::async_trait;
use pagination::PageRequest;
use uuid::Uuid;

use crate::domain::{Error, InterviewRecordSummary, InterviewRecordView, UserId};

/// Driving port for interview record read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewRecordQuery: Send + Sync {
    /// Fetches one interview record with `page` applied to its details.
    ///
    /// A window past the end of the list yields an empty `details` vector
    /// rather than an error; only a missing record is a failure.
    async fn get_interview_record_by_id(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        page: PageRequest,
    ) -> Result<InterviewRecordView, Error>;

    /// Lists sidebar summaries for every record the user owns, in creation
    /// order. Users without a record book get an empty list.
    async fn get_sidebar_data(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<InterviewRecordSummary>, Error>;
}

/// Fixture query implementation behaving like a user with no stored data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInterviewRecordQuery;

#[async_trait]
impl InterviewRecordQuery for FixtureInterviewRecordQuery {
    async fn get_interview_record_by_id(
        &self,
        _user_id: &UserId,
        _interview_record_id: Uuid,
        _page: PageRequest,
    ) -> Result<InterviewRecordView, Error> {
        Err(Error::not_found("interview record not found"))
    }

    async fn get_sidebar_data(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<InterviewRecordSummary>, Error> {
        Ok(Vec::new())
    }
}
