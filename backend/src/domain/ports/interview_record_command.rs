//! Driving port for interview record mutations.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    Error, InterviewRecord, InterviewRecordDraft, InterviewRecordView, RecordDetail,
    RecordDetailDraft, UserId,
};

/// Driving port for interview record write operations.
///
/// Detail indexes arrive as signed integers straight from the transport.
/// Implementations treat anything outside the owning record's bounds,
/// negative values included, as addressing a missing resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewRecordCommand: Send + Sync {
    /// Creates an interview record for `user_id` and returns its full view.
    /// A user without a record book gets one implicitly.
    async fn create_interview_record(
        &self,
        user_id: &UserId,
        draft: InterviewRecordDraft,
    ) -> Result<InterviewRecordView, Error>;

    /// Replaces the mutable fields of an existing record wholesale and
    /// returns the refreshed view with every detail included.
    async fn update_interview_record(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        draft: InterviewRecordDraft,
    ) -> Result<InterviewRecordView, Error>;

    /// Deletes a record. Returns `false` when no record matches, leaving the
    /// book untouched.
    async fn delete_interview_record(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
    ) -> Result<bool, Error>;

    /// Appends a question-and-answer entry to an existing record.
    async fn create_record_detail(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        draft: RecordDetailDraft,
    ) -> Result<RecordDetail, Error>;

    /// Replaces the detail at `detail_index` within an existing record.
    async fn update_record_detail(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        detail_index: i64,
        draft: RecordDetailDraft,
    ) -> Result<RecordDetail, Error>;

    /// Removes the detail at `detail_index`, shifting later entries down one
    /// position. Returns `false` when the record or the index is missing.
    async fn delete_record_detail(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        detail_index: i64,
    ) -> Result<bool, Error>;
}

/// Fixture command implementation behaving like a user with no stored data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInterviewRecordCommand;

#[async_trait]
impl InterviewRecordCommand for FixtureInterviewRecordCommand {
    async fn create_interview_record(
        &self,
        _user_id: &UserId,
        draft: InterviewRecordDraft,
    ) -> Result<InterviewRecordView, Error> {
        let record = InterviewRecord::new(draft, Utc::now());
        Ok(InterviewRecordView::from(&record))
    }

    async fn update_interview_record(
        &self,
        _user_id: &UserId,
        _interview_record_id: Uuid,
        _draft: InterviewRecordDraft,
    ) -> Result<InterviewRecordView, Error> {
        Err(Error::not_found("interview record not found"))
    }

    async fn delete_interview_record(
        &self,
        _user_id: &UserId,
        _interview_record_id: Uuid,
    ) -> Result<bool, Error> {
        Ok(false)
    }

    async fn create_record_detail(
        &self,
        _user_id: &UserId,
        _interview_record_id: Uuid,
        _draft: RecordDetailDraft,
    ) -> Result<RecordDetail, Error> {
        Err(Error::not_found("interview record not found"))
    }

    async fn update_record_detail(
        &self,
        _user_id: &UserId,
        _interview_record_id: Uuid,
        _detail_index: i64,
        _draft: RecordDetailDraft,
    ) -> Result<RecordDetail, Error> {
        Err(Error::not_found("interview record not found"))
    }

    async fn delete_record_detail(
        &self,
        _user_id: &UserId,
        _interview_record_id: Uuid,
        _detail_index: i64,
    ) -> Result<bool, Error> {
        Ok(false)
    }
}
