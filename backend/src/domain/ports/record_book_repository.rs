//! Port for record book persistence.

use async_trait::async_trait;

use crate::domain::{RecordBook, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record book repository adapters.
    pub enum RecordBookRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "record book repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "record book repository query failed: {message}",
    }
}

/// Port for loading and storing whole record books.
///
/// The book is the unit of persistence: `save` replaces whatever was stored
/// for that user before. Concurrent writers therefore race at book
/// granularity and the last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordBookRepository: Send + Sync {
    /// Find the record book owned by `user_id`.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<RecordBook>, RecordBookRepositoryError>;

    /// Persist a record book, replacing any previous version.
    async fn save(&self, book: &RecordBook) -> Result<(), RecordBookRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecordBookRepository;

#[async_trait]
impl RecordBookRepository for FixtureRecordBookRepository {
    async fn find_by_user_id(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<RecordBook>, RecordBookRepositoryError> {
        Ok(None)
    }

    async fn save(&self, _book: &RecordBook) -> Result<(), RecordBookRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    fn owner() -> UserId {
        UserId::new("user-1").expect("plain identifier is valid")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let repo = FixtureRecordBookRepository;
        let found = repo
            .find_by_user_id(&owner())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_save_succeeds() {
        let repo = FixtureRecordBookRepository;
        let book = RecordBook::new(owner());

        repo.save(&book).await.expect("fixture save succeeds");
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = RecordBookRepositoryError::connection("refused");
        assert!(err.to_string().contains("refused"));
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = RecordBookRepositoryError::query("primary stepped down");
        let msg = err.to_string();
        assert!(msg.contains("primary stepped down"));
    }
}
