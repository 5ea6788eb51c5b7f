use crate::application::SessionId;
use crate::domain::{QuestionId, QuizId, QuizResult, ReviewItem};

/// Events emitted after each command
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// A run began at question 0
    SessionStarted {
        session_id: SessionId,
        quiz_id: QuizId,
        question_count: usize,
    },

    /// An answer was recorded
    AnswerSelected {
        session_id: SessionId,
        question_id: QuestionId,
        option: String,
    },

    /// The cursor moved (forward or back)
    MovedTo {
        session_id: SessionId,
        current_index: usize,
    },

    /// The run was scored and the session closed
    QuizCompleted {
        session_id: SessionId,
        result: QuizResult,
        review: Vec<ReviewItem>,
    },

    /// The run was dropped before completion
    SessionAbandoned { session_id: SessionId },

    /// Command was denied; no state changed
    CommandFailed { command: String, reason: String },
}
