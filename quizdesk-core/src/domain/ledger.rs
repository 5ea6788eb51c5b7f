use crate::domain::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-session mapping of question to the selected option.
///
/// At most one answer per question. Updates go through [`AnswerLedger::with_answer`],
/// which hands back a new ledger; entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerLedger {
    answers: HashMap<QuestionId, String>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer for a question
    pub fn with_answer(mut self, question_id: QuestionId, option: String) -> Self {
        self.answers.insert(question_id, option);
        self
    }

    pub fn answer(&self, question_id: QuestionId) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
