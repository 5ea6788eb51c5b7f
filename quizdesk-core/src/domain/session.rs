use crate::domain::{
    AnswerLedger, NavigationCursor, Question, QuestionId, Quiz, QuizResult, Score, UserIdentity,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observable state of a quiz run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress { current_index: usize },
    Completed { score: u32, percentage: u8 },
}

/// Outcome of a successful [`QuizSession::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Cursor moved to the given question index
    MovedTo(usize),
    /// The last question was answered and the run is scored
    Completed(QuizResult),
}

/// One line of the results review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub index: usize,
    pub question_text: String,
    /// `None` when the question was never answered
    pub selected: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
}

/// Denied transitions. None of these change session state.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SessionError {
    #[error("Quiz has no questions")]
    EmptyQuiz,

    #[error("Quiz run is already completed")]
    NotInProgress,

    #[error("Quiz run is not completed yet")]
    NotCompleted,

    #[error("Question {} must be answered before moving on", .index + 1)]
    Unanswered {
        index: usize,
        question_id: QuestionId,
    },

    #[error("Already at the first question")]
    AtFirstQuestion,

    #[error("Question not found: {0}")]
    UnknownQuestion(QuestionId),
}

/// Quiz-taking state machine for a single test-taker.
///
/// Starts at `InProgress(0)`, ends in `Completed`. The ledger and cursor are
/// owned by the session and replaced only by the transitions below.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    taker: UserIdentity,
    ledger: AnswerLedger,
    cursor: NavigationCursor,
    started_at: DateTime<Utc>,
    result: Option<QuizResult>,
}

impl QuizSession {
    /// Begin a run of `quiz` on behalf of `taker`
    pub fn start(quiz: Quiz, taker: UserIdentity) -> Result<Self, SessionError> {
        let cursor = NavigationCursor::new(quiz.questions.len()).ok_or(SessionError::EmptyQuiz)?;

        tracing::debug!(quiz_id = %quiz.id, taker = %taker, "Quiz session started");

        Ok(Self {
            quiz,
            taker,
            ledger: AnswerLedger::new(),
            cursor,
            started_at: Utc::now(),
            result: None,
        })
    }

    // ===== Queries =====

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn taker(&self) -> &UserIdentity {
        &self.taker
    }

    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn state(&self) -> SessionState {
        match &self.result {
            Some(result) => SessionState::Completed {
                score: result.score,
                percentage: result.percentage,
            },
            None => SessionState::InProgress {
                current_index: self.cursor.index(),
            },
        }
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    /// Result of the run, once completed
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Question currently displayed (`None` once completed)
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_completed() {
            return None;
        }
        self.quiz.questions.get(self.cursor.index())
    }

    /// 1-based position and total, e.g. "Question 2 of 5"
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor.index() + 1, self.cursor.total())
    }

    pub fn is_last_question(&self) -> bool {
        self.cursor.is_last()
    }

    /// Whether the displayed question has an answer and `advance` may proceed
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .is_some_and(|q| self.ledger.is_answered(q.id))
    }

    // ===== Transitions =====

    /// Record the test-taker's choice for a question.
    ///
    /// Overwrites an earlier choice; the cursor does not move. The option is
    /// not checked against the question's list.
    pub fn select_answer(
        &mut self,
        question_id: QuestionId,
        option: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.ensure_in_progress()?;

        if self.quiz.question(question_id).is_none() {
            return Err(SessionError::UnknownQuestion(question_id));
        }

        let option = option.into();
        tracing::debug!(%question_id, %option, "Answer selected");

        self.ledger = std::mem::take(&mut self.ledger).with_answer(question_id, option);
        Ok(())
    }

    /// Select an answer for the displayed question
    pub fn select_current(&mut self, option: impl Into<String>) -> Result<(), SessionError> {
        let question_id = self
            .current_question()
            .map(|q| q.id)
            .ok_or(SessionError::NotInProgress)?;
        self.select_answer(question_id, option)
    }

    /// Move to the next question, or score the run on the last one.
    ///
    /// Denied while the displayed question is unanswered.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        self.ensure_in_progress()?;

        let index = self.cursor.index();
        let question_id = self.quiz.questions[index].id;
        if !self.ledger.is_answered(question_id) {
            return Err(SessionError::Unanswered { index, question_id });
        }

        match self.cursor.next() {
            Some(next) => {
                self.cursor = next;
                Ok(Advance::MovedTo(next.index()))
            }
            None => Ok(Advance::Completed(self.submit())),
        }
    }

    /// Step back one question, keeping all recorded answers
    pub fn retreat(&mut self) -> Result<usize, SessionError> {
        self.ensure_in_progress()?;

        self.cursor = self
            .cursor
            .previous()
            .ok_or(SessionError::AtFirstQuestion)?;
        Ok(self.cursor.index())
    }

    fn submit(&mut self) -> QuizResult {
        let score = Score::tally(&self.quiz, &self.ledger);
        let completed_at = Utc::now();
        let elapsed = (completed_at - self.started_at).num_seconds().max(0) as u64;

        let result = QuizResult {
            user_id: self.taker.user_id(),
            username: self.taker.username().to_string(),
            quiz_id: self.quiz.id,
            quiz_title: self.quiz.title.clone(),
            score: score.correct,
            total_questions: score.total,
            percentage: score.percentage(),
            completed_at,
            time_taken_seconds: Some(elapsed),
        };

        tracing::info!(
            quiz_id = %self.quiz.id,
            user = %self.taker.username(),
            score = result.score,
            total = result.total_questions,
            percentage = result.percentage,
            "Quiz completed"
        );

        self.result = Some(result.clone());
        result
    }

    /// Per-question review, available once the run is completed
    pub fn review(&self) -> Result<Vec<ReviewItem>, SessionError> {
        if !self.is_completed() {
            return Err(SessionError::NotCompleted);
        }

        Ok(self
            .quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, q)| {
                let selected = self.ledger.answer(q.id).map(str::to_string);
                let is_correct = selected.as_deref().is_some_and(|a| q.is_correct(a));
                ReviewItem {
                    index,
                    question_text: q.text.clone(),
                    selected,
                    correct_option: q.correct_option.clone(),
                    is_correct,
                }
            })
            .collect())
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.is_completed() {
            return Err(SessionError::NotInProgress);
        }
        Ok(())
    }
}
