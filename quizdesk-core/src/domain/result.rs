use crate::domain::{AnswerLedger, Quiz, QuizId};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of correct answers out of the quiz length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Count questions whose recorded answer equals the correct option.
    ///
    /// Unanswered questions count as incorrect.
    pub fn tally(quiz: &Quiz, ledger: &AnswerLedger) -> Self {
        let correct = quiz
            .questions
            .iter()
            .filter(|q| ledger.answer(q.id).is_some_and(|a| q.is_correct(a)))
            .count();

        Self {
            correct: correct as u32,
            total: quiz.questions.len() as u32,
        }
    }

    /// `round(100 * correct / total)`, halves rounded up.
    ///
    /// Callers guarantee `total > 0`; a zero total yields 0.
    pub fn percentage(&self) -> u8 {
        let correct = u64::from(self.correct);
        let total = u64::from(self.total);
        (200 * correct + total)
            .checked_div(2 * total)
            .map(|p| p.min(100) as u8)
            .unwrap_or(0)
    }
}

/// Outcome of one completed quiz run. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub user_id: Uuid,
    pub username: String,
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub score: u32,
    pub total_questions: u32,
    /// 0-100
    pub percentage: u8,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub time_taken_seconds: Option<u64>,
}
