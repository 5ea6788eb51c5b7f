use async_trait::async_trait;
use quizdesk_core::domain::QuizId;
use quizdesk_core::{Quiz, QuizResult, QuizStore, QuizSummary, ResultStore, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// On-disk layout of the data file
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataFile {
    #[serde(default)]
    quizzes: Vec<Quiz>,

    #[serde(default)]
    results: Vec<QuizResult>,
}

/// Quiz and result store backed by a single JSON file.
///
/// A missing file reads as empty. Writes replace the whole document through a
/// temporary sibling file so a crash never leaves it half-written.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved results, oldest first
    pub async fn results(&self) -> Result<Vec<QuizResult>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.results)
    }

    async fn load(&self) -> Result<DataFile, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(DataFile::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file missing, starting empty");
                Ok(DataFile::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, data: &DataFile) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(data)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");

        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl QuizStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut summaries: Vec<_> = self.load().await?.quizzes.iter().map(Quiz::summary).collect();
        summaries.sort_by(|a, b| a.title.cmp(&b.title));
        debug!(quiz_count = summaries.len(), "Listed quizzes");
        Ok(summaries)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_quiz(&self, quiz_id: QuizId) -> Result<Quiz, StoreError> {
        let _guard = self.lock.lock().await;
        let quiz = self
            .load()
            .await?
            .quizzes
            .into_iter()
            .find(|q| q.id == quiz_id)
            .ok_or(StoreError::NotFound(quiz_id))?;

        // Hand-edited files may hold quizzes that were never validated
        if let Err(e) = quiz.check() {
            warn!(%quiz_id, error = %e, "Stored quiz is malformed");
            return Err(StoreError::Internal(format!("Quiz {} is malformed: {}", quiz_id, e)));
        }
        Ok(quiz)
    }

    #[instrument(skip(self, quiz), fields(quiz_id = %quiz.id))]
    async fn create_quiz(&self, quiz: Quiz) -> Result<QuizId, StoreError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        if data.quizzes.iter().any(|q| q.id == quiz.id) {
            return Err(StoreError::AlreadyExists(quiz.id));
        }

        let quiz_id = quiz.id;
        data.quizzes.push(quiz);
        self.store(&data).await?;
        debug!("Quiz written");
        Ok(quiz_id)
    }
}

#[async_trait]
impl ResultStore for JsonFileStore {
    #[instrument(skip(self, result), fields(quiz_id = %result.quiz_id, user = %result.username))]
    async fn save_result(&self, result: QuizResult) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        data.results.push(result);
        self.store(&data).await?;
        debug!("Result written");
        Ok(())
    }
}
