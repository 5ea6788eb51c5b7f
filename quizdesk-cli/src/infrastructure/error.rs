use quizdesk_core::domain::UserError;
use quizdesk_core::{AuthoringError, SessionError, StoreError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Draft file not found: {path}")]
    DraftFileNotFound { path: PathBuf },

    #[error("Draft has {issues} validation issue(s)")]
    InvalidDraft { issues: usize },

    #[error("Invalid quiz ID: {0}")]
    InvalidQuizId(String),

    #[error("Invalid user: {0}")]
    InvalidUser(#[from] UserError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Publishing failed: {0}")]
    Authoring(#[from] AuthoringError),

    #[error("Quiz run failed: {0}")]
    Session(#[from] SessionError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    pub fn draft_not_found(path: PathBuf) -> Self {
        CliError::DraftFileNotFound { path }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
