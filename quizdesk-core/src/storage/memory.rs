use crate::domain::{Quiz, QuizId, QuizResult, QuizSummary};
use crate::traits::{QuizStore, ResultStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, instrument};

/// In-process store, shared by cloning
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    quizzes: Arc<RwLock<HashMap<QuizId, Quiz>>>,
    results: Arc<RwLock<Vec<QuizResult>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with quizzes
    pub fn with_quizzes(quizzes: impl IntoIterator<Item = Quiz>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.quizzes.write() {
            map.extend(quizzes.into_iter().map(|q| (q.id, q)));
        }
        store
    }

    /// Snapshot of saved results, oldest first
    pub fn results(&self) -> Result<Vec<QuizResult>, StoreError> {
        match self.results.read() {
            Ok(results) => Ok(results.clone()),
            Err(e) => Err(StoreError::Internal(e.to_string())),
        }
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    #[instrument(skip(self))]
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, StoreError> {
        match self.quizzes.read() {
            Ok(quizzes) => {
                let mut summaries: Vec<_> = quizzes.values().map(Quiz::summary).collect();
                summaries.sort_by(|a, b| a.title.cmp(&b.title));
                debug!(quiz_count = summaries.len(), "Listed quizzes");
                Ok(summaries)
            }
            Err(e) => {
                error!(?e, "Failed to list quizzes");
                Err(StoreError::Internal(e.to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    async fn fetch_quiz(&self, quiz_id: QuizId) -> Result<Quiz, StoreError> {
        match self.quizzes.read() {
            Ok(quizzes) => quizzes
                .get(&quiz_id)
                .cloned()
                .ok_or(StoreError::NotFound(quiz_id)),
            Err(e) => {
                error!(?e, "Failed to fetch quiz");
                Err(StoreError::Internal(e.to_string()))
            }
        }
    }

    #[instrument(skip(self, quiz), fields(quiz_id = %quiz.id))]
    async fn create_quiz(&self, quiz: Quiz) -> Result<QuizId, StoreError> {
        match self.quizzes.write() {
            Ok(mut quizzes) => {
                if quizzes.contains_key(&quiz.id) {
                    return Err(StoreError::AlreadyExists(quiz.id));
                }
                let quiz_id = quiz.id;
                quizzes.insert(quiz_id, quiz);
                debug!("Quiz stored");
                Ok(quiz_id)
            }
            Err(e) => {
                error!(?e, "Failed to store quiz");
                Err(StoreError::Internal(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    #[instrument(skip(self, result), fields(quiz_id = %result.quiz_id, user = %result.username))]
    async fn save_result(&self, result: QuizResult) -> Result<(), StoreError> {
        match self.results.write() {
            Ok(mut results) => {
                results.push(result);
                debug!("Result stored");
                Ok(())
            }
            Err(e) => {
                error!(?e, "Failed to store result");
                Err(StoreError::Internal(e.to_string()))
            }
        }
    }
}
