//! Interview record domain service.
//!
//! Implements the record driving ports on top of the record book repository.
//! Every operation loads the owner's whole book, works on it in memory, and
//! saves it back. Concurrent mutations of the same book therefore race at
//! save time and the last write wins.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::PageRequest;
use uuid::Uuid;

use crate::domain::ports::{
    InterviewRecordCommand, InterviewRecordQuery, RecordBookRepository, RecordBookRepositoryError,
};
use crate::domain::{
    Error, InterviewRecord, InterviewRecordDraft, InterviewRecordSummary, InterviewRecordView,
    RecordBook, RecordDetail, RecordDetailDraft, UserId,
};

fn map_repository_error(error: RecordBookRepositoryError) -> Error {
    match error {
        RecordBookRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("record book repository unavailable: {message}"))
        }
        RecordBookRepositoryError::Query { message } => {
            Error::internal(format!("record book repository error: {message}"))
        }
    }
}

fn record_not_found(interview_record_id: Uuid) -> Error {
    Error::not_found(format!("interview record {interview_record_id} not found"))
}

fn detail_not_found(detail_index: i64) -> Error {
    Error::not_found(format!("record detail at index {detail_index} not found"))
}

/// Converts a transport-level detail index into a list position. Negative
/// values have no position and never address a detail.
fn detail_position(detail_index: i64) -> Option<usize> {
    usize::try_from(detail_index).ok()
}

/// Interview record service implementing both driving ports.
#[derive(Clone)]
pub struct RecordService<R> {
    record_book_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> RecordService<R> {
    /// Create a new service with the record book repository.
    pub fn new(record_book_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            record_book_repo,
            clock,
        }
    }
}

impl<R> RecordService<R>
where
    R: RecordBookRepository,
{
    async fn load_book(&self, user_id: &UserId) -> Result<Option<RecordBook>, Error> {
        self.record_book_repo
            .find_by_user_id(user_id)
            .await
            .map_err(map_repository_error)
    }

    /// Loads the user's book, falling back to an empty one when nothing is
    /// stored yet. The fallback only reaches the repository if a mutation
    /// succeeds and saves it.
    async fn load_or_new_book(&self, user_id: &UserId) -> Result<RecordBook, Error> {
        Ok(self
            .load_book(user_id)
            .await?
            .unwrap_or_else(|| RecordBook::new(user_id.clone())))
    }

    async fn save_book(&self, book: &RecordBook) -> Result<(), Error> {
        self.record_book_repo
            .save(book)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> InterviewRecordCommand for RecordService<R>
where
    R: RecordBookRepository,
{
    async fn create_interview_record(
        &self,
        user_id: &UserId,
        draft: InterviewRecordDraft,
    ) -> Result<InterviewRecordView, Error> {
        let mut book = self.load_or_new_book(user_id).await?;
        let record = InterviewRecord::new(draft, self.clock.utc());
        let view = InterviewRecordView::from(&record);
        book.append_record(record);
        self.save_book(&book).await?;
        Ok(view)
    }

    async fn update_interview_record(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        draft: InterviewRecordDraft,
    ) -> Result<InterviewRecordView, Error> {
        let mut book = self.load_or_new_book(user_id).await?;
        let now = self.clock.utc();
        let record = book
            .record_mut(interview_record_id)
            .ok_or_else(|| record_not_found(interview_record_id))?;
        record.apply_draft(draft, now);
        let view = InterviewRecordView::from(&*record);
        self.save_book(&book).await?;
        Ok(view)
    }

    async fn delete_interview_record(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
    ) -> Result<bool, Error> {
        let mut book = self.load_or_new_book(user_id).await?;
        if !book.remove_record(interview_record_id) {
            return Ok(false);
        }
        self.save_book(&book).await?;
        Ok(true)
    }

    async fn create_record_detail(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        draft: RecordDetailDraft,
    ) -> Result<RecordDetail, Error> {
        let mut book = self.load_or_new_book(user_id).await?;
        let now = self.clock.utc();
        let record = book
            .record_mut(interview_record_id)
            .ok_or_else(|| record_not_found(interview_record_id))?;
        let detail = RecordDetail::from(draft);
        record.append_detail(detail.clone(), now);
        self.save_book(&book).await?;
        Ok(detail)
    }

    async fn update_record_detail(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        detail_index: i64,
        draft: RecordDetailDraft,
    ) -> Result<RecordDetail, Error> {
        let mut book = self.load_or_new_book(user_id).await?;
        let now = self.clock.utc();
        let record = book
            .record_mut(interview_record_id)
            .ok_or_else(|| record_not_found(interview_record_id))?;
        let position =
            detail_position(detail_index).ok_or_else(|| detail_not_found(detail_index))?;
        let detail = RecordDetail::from(draft);
        if !record.replace_detail(position, detail.clone(), now) {
            return Err(detail_not_found(detail_index));
        }
        self.save_book(&book).await?;
        Ok(detail)
    }

    async fn delete_record_detail(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        detail_index: i64,
    ) -> Result<bool, Error> {
        let mut book = self.load_or_new_book(user_id).await?;
        let now = self.clock.utc();
        let Some(record) = book.record_mut(interview_record_id) else {
            return Ok(false);
        };
        let Some(position) = detail_position(detail_index) else {
            return Ok(false);
        };
        if !record.remove_detail(position, now) {
            return Ok(false);
        }
        self.save_book(&book).await?;
        Ok(true)
    }
}

#[async_trait]
impl<R> InterviewRecordQuery for RecordService<R>
where
    R: RecordBookRepository,
{
    async fn get_interview_record_by_id(
        &self,
        user_id: &UserId,
        interview_record_id: Uuid,
        page: PageRequest,
    ) -> Result<InterviewRecordView, Error> {
        let book = self.load_book(user_id).await?;
        let record = book
            .as_ref()
            .and_then(|book| book.record(interview_record_id))
            .ok_or_else(|| record_not_found(interview_record_id))?;
        let details = page.slice(record.details()).to_vec();
        Ok(InterviewRecordView::with_details(record, details))
    }

    async fn get_sidebar_data(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<InterviewRecordSummary>, Error> {
        let book = self.load_book(user_id).await?;
        Ok(book
            .map(|book| {
                book.records()
                    .iter()
                    .map(InterviewRecordSummary::from)
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "record_service_tests.rs"]
mod tests;
