//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed entities shared by the API and
//! persistence layers, keep mutation behind aggregate methods, and document
//! invariants in each type's Rustdoc.

pub mod error;
pub mod ports;
mod record;
mod record_service;
mod trace_id;
mod user_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::record::{
    InterviewRecord, InterviewRecordDraft, InterviewRecordSummary, InterviewRecordView,
    RecordBook, RecordDetail, RecordDetailDraft,
};
pub use self::record_service::RecordService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_id::{UserId, UserIdValidationError};
