use async_trait::async_trait;
use qa_types::{Answer, Question};
use std::sync::Arc;

pub mod migrations;
mod sqlite;

pub use sqlite::SqliteQaStorage;

pub type SharedStorage = Arc<dyn QaStorage>;

/// Persistence for questions and the answers they own.
///
/// Every method is a single unit of work: it either fully applies or leaves
/// the store untouched. Existence is checked explicitly before acting, so a
/// missing row always surfaces as one of the typed not-found variants rather
/// than a backend error.
#[async_trait]
pub trait QaStorage: Send + Sync {
    /// Returns the new question with an empty `answers` list.
    async fn create_question(&self, text: &str) -> Result<Question, StorageError>;
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
    async fn get_question_with_answers(&self, question_id: i64) -> Result<Question, StorageError>;
    /// Removes the question and all of its answers together.
    async fn delete_question(&self, question_id: i64) -> Result<(), StorageError>;

    /// Fails with [`StorageError::QuestionMissing`] when `question_id` does not exist.
    async fn create_answer(
        &self,
        question_id: i64,
        text: &str,
        user_id: &str,
    ) -> Result<Answer, StorageError>;
    async fn get_answer(&self, answer_id: i64) -> Result<Answer, StorageError>;
    async fn delete_answer(&self, answer_id: i64) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Question with id {0} not found.")]
    QuestionNotFound(i64),

    #[error("Answer with id {0} not found.")]
    AnswerNotFound(i64),

    /// An answer was submitted against a question that does not exist
    #[error("Question with id {0} does not exist.")]
    QuestionMissing(i64),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] refinery::Error),

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}
