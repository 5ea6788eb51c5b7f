pub mod application;
pub mod domain;
pub mod storage;
pub mod traits;

pub use application::{
    publish_draft, save_result_best_effort, AuthoringError, QuizCommand, QuizEvent,
    QuizEventLoop, SessionId,
};
pub use domain::{
    validate, Advance, DraftQuestion, DraftQuiz, PublishError, Question, Quiz, QuizResult,
    QuizSession, QuizSummary, SessionError, SessionState, UserIdentity, ValidationIssue,
    ValidationReport,
};
pub use storage::MemoryStore;
pub use traits::{QuizStore, ResultStore, StoreError};
