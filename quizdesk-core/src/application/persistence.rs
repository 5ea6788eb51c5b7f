use crate::domain::QuizResult;
use crate::traits::ResultStore;

/// Save a result, logging and swallowing any failure.
///
/// Returns whether the store acknowledged the result. The locally computed
/// score stands either way.
pub async fn save_result_best_effort<S>(store: &S, result: &QuizResult) -> bool
where
    S: ResultStore + ?Sized,
{
    match store.save_result(result.clone()).await {
        Ok(()) => {
            tracing::debug!(quiz_id = %result.quiz_id, user = %result.username, "Quiz result saved");
            true
        }
        Err(e) => {
            tracing::warn!(
                quiz_id = %result.quiz_id,
                user = %result.username,
                error = %e,
                "Failed to save quiz result"
            );
            false
        }
    }
}
