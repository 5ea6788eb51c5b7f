use cucumber::World;
use quizdesk_core::domain::ReviewItem;
use quizdesk_core::{
    publish_draft, DraftQuiz, MemoryStore, Question, Quiz, QuizCommand, QuizEvent, QuizEventLoop,
    QuizResult, QuizSession, SessionId, UserIdentity, ValidationReport,
};

/// Options every generated quiz question offers
pub const STANDARD_OPTIONS: [&str; 4] = ["A", "B", "C", "X"];

#[derive(Debug, World, Default)]
pub struct QuizWorld {
    /// Draft under edit in authoring scenarios
    pub draft: Option<DraftQuiz>,

    /// Report from the last validation
    pub report: Option<ValidationReport>,

    /// Backing store for publishing and result saving
    pub store: MemoryStore,

    /// Quiz being taken
    pub quiz: Option<Quiz>,

    /// Command loop (the system under test for quiz-taking)
    pub event_loop: QuizEventLoop,

    pub session_id: Option<SessionId>,

    /// Last event emitted (for assertions)
    pub last_event: Option<QuizEvent>,

    /// Result from the last `QuizCompleted` event
    pub result: Option<QuizResult>,

    /// Review from the last `QuizCompleted` event
    pub review: Option<Vec<ReviewItem>>,

    pub last_error: Option<String>,

    /// Route result saves to a failing backend
    pub store_offline: bool,

    /// Outcome of the last best-effort save
    pub saved: Option<bool>,
}

impl QuizWorld {
    /// Execute a command and store the result
    pub fn execute(&mut self, command: QuizCommand) -> &QuizEvent {
        let event = self.event_loop.handle_command(command);

        match &event {
            QuizEvent::CommandFailed { reason, .. } => self.last_error = Some(reason.clone()),
            QuizEvent::SessionStarted { session_id, .. } => self.session_id = Some(*session_id),
            QuizEvent::QuizCompleted { result, review, .. } => {
                self.result = Some(result.clone());
                self.review = Some(review.clone());
            }
            _ => {}
        }

        self.last_event.insert(event)
    }

    pub fn draft_mut(&mut self) -> &mut DraftQuiz {
        self.draft.as_mut().expect("No draft started")
    }

    /// Validate the draft and remember the report
    pub fn validate_draft(&mut self) -> &ValidationReport {
        let report = self.draft.as_ref().expect("No draft started").validate();
        self.report.insert(report)
    }

    /// Publish the draft into the store, recording any failure
    pub async fn publish_draft(&mut self) {
        let draft = self.draft.clone().expect("No draft started");
        match publish_draft(&self.store, &draft).await {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    /// Build a quiz whose questions all offer `STANDARD_OPTIONS`
    pub fn quiz_with_answers(title: &str, answers: &[&str]) -> Quiz {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, answer)| {
                Question::new(
                    format!("Question {}?", i + 1),
                    STANDARD_OPTIONS.iter().map(|o| o.to_string()).collect(),
                    answer.to_string(),
                )
                .expect("Invalid question")
            })
            .collect();
        Quiz::new(title.to_string(), "quizmaster".to_string(), questions).expect("Invalid quiz")
    }

    pub fn start_session(&mut self, username: &str) -> &QuizEvent {
        let quiz = self.quiz.clone().expect("No quiz available");
        let taker = UserIdentity::generate(username.to_string()).expect("Invalid username");
        self.execute(QuizCommand::StartSession {
            session_id: None,
            quiz,
            taker,
        })
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id.expect("No session started")
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session_id
            .and_then(|id| self.event_loop.get_session(&id))
    }

    /// Select an option for the question currently displayed
    pub fn select(&mut self, option: &str) -> &QuizEvent {
        let session_id = self.session_id();
        let question_id = self
            .session()
            .and_then(|s| s.current_question())
            .map(|q| q.id)
            .expect("No question displayed");
        self.execute(QuizCommand::SelectAnswer {
            session_id,
            question_id,
            option: option.to_string(),
        })
    }

    /// Check if last event was a failure
    pub fn last_command_failed(&self) -> bool {
        matches!(self.last_event, Some(QuizEvent::CommandFailed { .. }))
    }

    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
