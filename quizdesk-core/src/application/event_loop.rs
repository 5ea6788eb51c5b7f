use crate::application::{QuizCommand, QuizEvent, SessionId};
use crate::domain::{Advance, QuestionId, Quiz, QuizSession, SessionError, UserIdentity};
use std::collections::HashMap;
use uuid::Uuid;

/// Processes commands against the sessions it owns and emits one event per command
#[derive(Debug, Clone, Default)]
pub struct QuizEventLoop {
    /// Live and completed sessions indexed by ID
    sessions: HashMap<SessionId, QuizSession>,
}

impl QuizEventLoop {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Process a single command and return the resulting event
    pub fn handle_command(&mut self, command: QuizCommand) -> QuizEvent {
        let name = command.name();
        let result = match command {
            QuizCommand::StartSession {
                session_id,
                quiz,
                taker,
            } => self.handle_start_session(session_id, quiz, taker),

            QuizCommand::SelectAnswer {
                session_id,
                question_id,
                option,
            } => self.handle_select_answer(session_id, question_id, option),

            QuizCommand::Advance { session_id } => self.handle_advance(session_id),

            QuizCommand::Retreat { session_id } => self.handle_retreat(session_id),

            QuizCommand::AbandonSession { session_id } => self.handle_abandon(session_id),
        };

        result.unwrap_or_else(|reason| {
            tracing::debug!(command = name, %reason, "Command failed");
            QuizEvent::CommandFailed {
                command: name.to_string(),
                reason,
            }
        })
    }

    fn handle_start_session(
        &mut self,
        session_id: Option<SessionId>,
        quiz: Quiz,
        taker: UserIdentity,
    ) -> Result<QuizEvent, String> {
        let session_id = session_id.unwrap_or_else(Uuid::new_v4);
        if self.sessions.contains_key(&session_id) {
            return Err(format!("Session {} already exists", session_id));
        }

        let session = QuizSession::start(quiz, taker).map_err(|e| e.to_string())?;
        let quiz_id = session.quiz().id;
        let question_count = session.quiz().question_count();
        self.sessions.insert(session_id, session);

        Ok(QuizEvent::SessionStarted {
            session_id,
            quiz_id,
            question_count,
        })
    }

    fn handle_select_answer(
        &mut self,
        session_id: SessionId,
        question_id: QuestionId,
        option: String,
    ) -> Result<QuizEvent, String> {
        let session = self.session_mut(session_id)?;
        session
            .select_answer(question_id, option.clone())
            .map_err(|e| e.to_string())?;

        Ok(QuizEvent::AnswerSelected {
            session_id,
            question_id,
            option,
        })
    }

    fn handle_advance(&mut self, session_id: SessionId) -> Result<QuizEvent, String> {
        let session = self.session_mut(session_id)?;

        match session.advance().map_err(|e| e.to_string())? {
            Advance::MovedTo(current_index) => Ok(QuizEvent::MovedTo {
                session_id,
                current_index,
            }),
            Advance::Completed(result) => {
                let review = session.review().map_err(|e| e.to_string())?;
                // The run is over; its ledger goes with it
                self.sessions.remove(&session_id);
                tracing::debug!(%session_id, "Completed session closed");

                Ok(QuizEvent::QuizCompleted {
                    session_id,
                    result,
                    review,
                })
            }
        }
    }

    fn handle_retreat(&mut self, session_id: SessionId) -> Result<QuizEvent, String> {
        let session = self.session_mut(session_id)?;
        let current_index = session.retreat().map_err(|e: SessionError| e.to_string())?;

        Ok(QuizEvent::MovedTo {
            session_id,
            current_index,
        })
    }

    fn handle_abandon(&mut self, session_id: SessionId) -> Result<QuizEvent, String> {
        self.sessions
            .remove(&session_id)
            .ok_or_else(|| format!("Session {} not found", session_id))?;

        Ok(QuizEvent::SessionAbandoned { session_id })
    }

    fn session_mut(&mut self, session_id: SessionId) -> Result<&mut QuizSession, String> {
        self.sessions
            .get_mut(&session_id)
            .ok_or_else(|| format!("Session {} not found", session_id))
    }

    // ===== Queries =====

    pub fn get_session(&self, session_id: &SessionId) -> Option<&QuizSession> {
        self.sessions.get(session_id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
