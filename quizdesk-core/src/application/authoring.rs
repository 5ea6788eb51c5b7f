use crate::domain::{DraftQuiz, PublishError, QuizId};
use crate::traits::{QuizStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum AuthoringError {
    #[error(transparent)]
    Rejected(#[from] PublishError),

    #[error("Failed to store quiz: {0}")]
    Store(#[from] StoreError),
}

/// Validate a draft, strip blank options and hand the quiz to the store.
///
/// Nothing reaches the store unless the validation report is empty.
pub async fn publish_draft<S>(store: &S, draft: &DraftQuiz) -> Result<QuizId, AuthoringError>
where
    S: QuizStore + ?Sized,
{
    let quiz = draft.publish()?;
    let quiz_id = store.create_quiz(quiz).await?;
    tracing::info!(%quiz_id, "Quiz published");
    Ok(quiz_id)
}
