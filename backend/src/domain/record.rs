//! Interview record aggregate and its read projections.
//!
//! A user's interview preparation data is stored as one document per user: a
//! [`RecordBook`] holding every [`InterviewRecord`], each of which carries an
//! ordered list of question-and-answer [`RecordDetail`] entries. Mutations go
//! through the aggregate so `updated_at` moves in step with the content it
//! describes, detail edits included.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::UserId;

/// Input payload for creating an interview record or replacing its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewRecordDraft {
    pub enterprise_name: String,
    pub category: String,
}

/// Input payload for one question-and-answer entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetailDraft {
    pub question: String,
    pub answer: String,
}

/// One question-and-answer entry inside an interview record.
///
/// Details have no identifier of their own; they are addressed by position
/// within their owning record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetail {
    pub question: String,
    pub answer: String,
}

impl From<RecordDetailDraft> for RecordDetail {
    fn from(draft: RecordDetailDraft) -> Self {
        Self {
            question: draft.question,
            answer: draft.answer,
        }
    }
}

/// A single interview engagement with its ordered detail entries.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewRecord {
    interview_record_id: Uuid,
    enterprise_name: String,
    category: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    details: Vec<RecordDetail>,
}

impl InterviewRecord {
    /// Creates a record with a fresh identifier and no details. Both
    /// timestamps start at `now`.
    #[must_use]
    pub fn new(draft: InterviewRecordDraft, now: DateTime<Utc>) -> Self {
        Self {
            interview_record_id: Uuid::new_v4(),
            enterprise_name: draft.enterprise_name,
            category: draft.category,
            created_at: now,
            updated_at: now,
            details: Vec::new(),
        }
    }

    /// Returns the record identifier.
    pub fn id(&self) -> Uuid {
        self.interview_record_id
    }

    /// Returns the enterprise the interview is with.
    pub fn enterprise_name(&self) -> &str {
        self.enterprise_name.as_str()
    }

    /// Returns the interview category.
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Returns the creation timestamp. Never changes after construction.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the most recent mutation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the detail entries in insertion order.
    pub fn details(&self) -> &[RecordDetail] {
        self.details.as_slice()
    }

    /// Replaces the mutable fields wholesale and refreshes `updated_at`.
    /// `created_at` and the detail list are untouched.
    pub fn apply_draft(&mut self, draft: InterviewRecordDraft, now: DateTime<Utc>) {
        self.enterprise_name = draft.enterprise_name;
        self.category = draft.category;
        self.updated_at = now;
    }

    /// Appends a detail entry and refreshes `updated_at`.
    pub fn append_detail(&mut self, detail: RecordDetail, now: DateTime<Utc>) {
        self.details.push(detail);
        self.updated_at = now;
    }

    /// Replaces the detail at `index` and refreshes `updated_at`. Returns
    /// `false` without modifying anything when `index` is out of range.
    pub fn replace_detail(
        &mut self,
        index: usize,
        detail: RecordDetail,
        now: DateTime<Utc>,
    ) -> bool {
        match self.details.get_mut(index) {
            Some(slot) => {
                *slot = detail;
                self.updated_at = now;
                true
            }
            None => false,
        }
    }

    /// Removes the detail at `index`, shifting later entries down one
    /// position, and refreshes `updated_at`. Returns `false` without
    /// modifying anything when `index` is out of range.
    pub fn remove_detail(&mut self, index: usize, now: DateTime<Utc>) -> bool {
        if index < self.details.len() {
            self.details.remove(index);
            self.updated_at = now;
            true
        } else {
            false
        }
    }
}

/// Per-user document holding every interview record the user owns.
///
/// Records keep their creation order; listings and lookups preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBook {
    user_id: UserId,
    interview_records: Vec<InterviewRecord>,
}

impl RecordBook {
    /// Creates an empty record book owned by `user_id`.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            interview_records: Vec::new(),
        }
    }

    /// Returns the owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the records in creation order.
    pub fn records(&self) -> &[InterviewRecord] {
        self.interview_records.as_slice()
    }

    /// Looks up a record by identifier.
    pub fn record(&self, interview_record_id: Uuid) -> Option<&InterviewRecord> {
        self.interview_records
            .iter()
            .find(|record| record.id() == interview_record_id)
    }

    /// Looks up a record by identifier for mutation.
    pub fn record_mut(&mut self, interview_record_id: Uuid) -> Option<&mut InterviewRecord> {
        self.interview_records
            .iter_mut()
            .find(|record| record.id() == interview_record_id)
    }

    /// Appends a record at the end of the book.
    pub fn append_record(&mut self, record: InterviewRecord) {
        self.interview_records.push(record);
    }

    /// Removes the record with the given identifier. Returns `false` when no
    /// record matches.
    pub fn remove_record(&mut self, interview_record_id: Uuid) -> bool {
        match self
            .interview_records
            .iter()
            .position(|record| record.id() == interview_record_id)
        {
            Some(index) => {
                self.interview_records.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Read projection of an interview record carrying a chosen detail window.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewRecordView {
    pub interview_record_id: Uuid,
    pub enterprise_name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: Vec<RecordDetail>,
}

impl InterviewRecordView {
    /// Projects `record` with an explicit detail window. The window carries
    /// no offset metadata; callers needing every detail use the `From`
    /// conversion instead.
    #[must_use]
    pub fn with_details(record: &InterviewRecord, details: Vec<RecordDetail>) -> Self {
        Self {
            interview_record_id: record.id(),
            enterprise_name: record.enterprise_name().to_owned(),
            category: record.category().to_owned(),
            created_at: record.created_at(),
            updated_at: record.updated_at(),
            details,
        }
    }
}

impl From<&InterviewRecord> for InterviewRecordView {
    fn from(record: &InterviewRecord) -> Self {
        Self::with_details(record, record.details().to_vec())
    }
}

/// Sidebar listing entry: an interview record without its details.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewRecordSummary {
    pub interview_record_id: Uuid,
    pub enterprise_name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&InterviewRecord> for InterviewRecordSummary {
    fn from(record: &InterviewRecord) -> Self {
        Self {
            interview_record_id: record.id(),
            enterprise_name: record.enterprise_name().to_owned(),
            category: record.category().to_owned(),
            created_at: record.created_at(),
            updated_at: record.updated_at(),
        }
    }
}
