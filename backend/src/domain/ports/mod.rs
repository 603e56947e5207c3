//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod interview_record_command;
mod interview_record_query;
mod record_book_repository;

#[cfg(test)]
pub use interview_record_command::MockInterviewRecordCommand;
pub use interview_record_command::{FixtureInterviewRecordCommand, InterviewRecordCommand};
#[cfg(test)]
pub use interview_record_query::MockInterviewRecordQuery;
pub use interview_record_query::{FixtureInterviewRecordQuery, InterviewRecordQuery};
#[cfg(test)]
pub use record_book_repository::MockRecordBookRepository;
pub use record_book_repository::{
    FixtureRecordBookRepository, RecordBookRepository, RecordBookRepositoryError,
};
