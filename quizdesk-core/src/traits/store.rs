use crate::domain::{Quiz, QuizId, QuizResult, QuizSummary};
use async_trait::async_trait;

/// Read/write access to published quizzes
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, StoreError>;

    async fn fetch_quiz(&self, quiz_id: QuizId) -> Result<Quiz, StoreError>;

    /// Persist a validated quiz, returning the ID it is stored under
    async fn create_quiz(&self, quiz: Quiz) -> Result<QuizId, StoreError>;
}

/// Sink for completed quiz results
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn save_result(&self, result: QuizResult) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Quiz not found: {0}")]
    NotFound(QuizId),

    #[error("Quiz already exists: {0}")]
    AlreadyExists(QuizId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
