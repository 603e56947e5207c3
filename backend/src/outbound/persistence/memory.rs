//! In-memory `RecordBookRepository` implementation.
//!
//! This adapter keeps every record book in a process-local map behind an
//! `RwLock`. It backs single-node deployments and tests; nothing survives a
//! restart.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{RecordBookRepository, RecordBookRepositoryError};
use crate::domain::{RecordBook, UserId};

/// Map-backed implementation of the `RecordBookRepository` port.
///
/// `save` replaces the stored book for its owner wholesale, so interleaved
/// writers observe last-write-wins semantics at book granularity. Reads hand
/// out clones; callers never hold references into the store.
#[derive(Clone, Default)]
pub struct InMemoryRecordBookRepository {
    books: Arc<RwLock<HashMap<UserId, RecordBook>>>,
}

impl InMemoryRecordBookRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordBookRepository for InMemoryRecordBookRepository {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<RecordBook>, RecordBookRepositoryError> {
        let books = self.books.read().map_err(|_| {
            RecordBookRepositoryError::connection("record book store lock poisoned")
        })?;
        Ok(books.get(user_id).cloned())
    }

    async fn save(&self, book: &RecordBook) -> Result<(), RecordBookRepositoryError> {
        let mut books = self.books.write().map_err(|_| {
            RecordBookRepositoryError::connection("record book store lock poisoned")
        })?;
        books.insert(book.user_id().clone(), book.clone());
        Ok(())
    }
}
