//! Persistence layer - store traits and implementations
//!
//! Stores are the two opaque persistence collaborators: questions keyed by
//! document id, and quizzes whose documents carry an ordered list of
//! question ids. The service only sees these traits; the MongoDB-backed
//! implementation lives in `mongo`, and tests substitute the in-memory one.

pub mod mongo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use quizbank_core::{DocId, Question, QuestionInput, QuestionPatch, Quiz};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Question persistence collaborator.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Unbounded scan of the whole collection.
    async fn find_all(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_by_id(&self, id: DocId) -> Result<Option<Question>, StoreError>;

    /// Persist a new question; the store assigns the identifier.
    async fn insert(&self, input: QuestionInput) -> Result<Question, StoreError>;

    /// Apply a partial update and return the post-update document, or
    /// `None` if no document matched the id.
    async fn update_by_id(
        &self,
        id: DocId,
        patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError>;

    /// Delete by id and return the prior document, or `None` if no match.
    async fn delete_by_id(&self, id: DocId) -> Result<Option<Question>, StoreError>;
}

/// Quiz persistence collaborator (read-only here).
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn find_by_id(&self, id: DocId) -> Result<Option<Quiz>, StoreError>;
}
