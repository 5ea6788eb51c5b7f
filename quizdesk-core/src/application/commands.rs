use crate::domain::{QuestionId, Quiz, UserIdentity};
use uuid::Uuid;

/// Session ID (one per quiz run)
pub type SessionId = Uuid;

/// Commands that drive quiz-taking sessions
#[derive(Debug, Clone, PartialEq)]
pub enum QuizCommand {
    /// Begin a run of a fetched quiz
    StartSession {
        session_id: Option<SessionId>,
        quiz: Quiz,
        taker: UserIdentity,
    },

    /// Record an answer (may overwrite an earlier one)
    SelectAnswer {
        session_id: SessionId,
        question_id: QuestionId,
        option: String,
    },

    /// Next question, or submit on the last one
    Advance { session_id: SessionId },

    /// Previous question
    Retreat { session_id: SessionId },

    /// Drop an unfinished run without side effects
    AbandonSession { session_id: SessionId },
}

impl QuizCommand {
    /// Short name used in failure events and logs
    pub fn name(&self) -> &'static str {
        match self {
            QuizCommand::StartSession { .. } => "StartSession",
            QuizCommand::SelectAnswer { .. } => "SelectAnswer",
            QuizCommand::Advance { .. } => "Advance",
            QuizCommand::Retreat { .. } => "Retreat",
            QuizCommand::AbandonSession { .. } => "AbandonSession",
        }
    }
}
