//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{InterviewRecordCommand, InterviewRecordQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub records: Arc<dyn InterviewRecordCommand>,
    pub records_query: Arc<dyn InterviewRecordQuery>,
}

impl HttpState {
    /// Construct state from the record ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{
    ///     FixtureInterviewRecordCommand, FixtureInterviewRecordQuery,
    /// };
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureInterviewRecordCommand),
    ///     Arc::new(FixtureInterviewRecordQuery),
    /// );
    /// let _records = state.records.clone();
    /// ```
    pub fn new(
        records: Arc<dyn InterviewRecordCommand>,
        records_query: Arc<dyn InterviewRecordQuery>,
    ) -> Self {
        Self {
            records,
            records_query,
        }
    }
}
