use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Quiz ID (assigned at publication)
pub type QuizId = Uuid;

/// Question ID (unique within a quiz)
pub type QuestionId = Uuid;

/// Lower bound on answer options per question
pub const MIN_OPTIONS: usize = 2;

/// Upper bound on answer options per question
pub const MAX_OPTIONS: usize = 6;

/// A single multiple-choice question of a published quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,

    /// Prompt shown to the test-taker
    pub text: String,

    /// Distinct, non-empty answer options in display order
    pub options: Vec<String>,

    /// Must equal exactly one entry of `options`
    pub correct_option: String,
}

/// Published quiz, read-only for quiz-taking sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub author_username: String,
    pub questions: Vec<Question>,
}

/// List-view projection of a quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    pub author_username: String,
    pub question_count: usize,
}

/// Invariant violations when building quizzes directly
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum QuizError {
    #[error("A published quiz needs at least one question")]
    NoQuestions,

    #[error("Question needs between 2 and 6 options, got {0}")]
    OptionCount(usize),

    #[error("Options must be non-empty")]
    EmptyOption,

    #[error("Options must be unique")]
    DuplicateOption,

    #[error("Correct option {0:?} is not one of the options")]
    CorrectOptionNotListed(String),

    #[error("Question ID {0} appears more than once")]
    DuplicateQuestionId(QuestionId),
}

impl Question {
    /// Create a question with a fresh ID, checking the option invariants
    pub fn new(
        text: String,
        options: Vec<String>,
        correct_option: String,
    ) -> Result<Self, QuizError> {
        Self::with_id(Uuid::new_v4(), text, options, correct_option)
    }

    /// Create with specific ID (for stores and fixtures)
    pub fn with_id(
        id: QuestionId,
        text: String,
        options: Vec<String>,
        correct_option: String,
    ) -> Result<Self, QuizError> {
        let question = Self {
            id,
            text,
            options,
            correct_option,
        };
        question.check()?;
        Ok(question)
    }

    /// Re-check invariants (e.g. after deserializing from a store)
    pub fn check(&self) -> Result<(), QuizError> {
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&self.options.len()) {
            return Err(QuizError::OptionCount(self.options.len()));
        }

        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(QuizError::EmptyOption);
        }

        let distinct: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        if distinct.len() != self.options.len() {
            return Err(QuizError::DuplicateOption);
        }

        if !self.options.contains(&self.correct_option) {
            return Err(QuizError::CorrectOptionNotListed(
                self.correct_option.clone(),
            ));
        }

        Ok(())
    }

    /// Exact string comparison against the correct option
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_option
    }
}

impl Quiz {
    /// Create a quiz with a fresh ID
    pub fn new(
        title: String,
        author_username: String,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        Self::with_id(Uuid::new_v4(), title, author_username, questions)
    }

    /// Create with specific ID
    pub fn with_id(
        id: QuizId,
        title: String,
        author_username: String,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let quiz = Self {
            id,
            title,
            author_username,
            questions,
        };
        quiz.check()?;
        Ok(quiz)
    }

    pub fn check(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.questions.iter().find(|q| !seen.insert(q.id)) {
            return Err(QuizError::DuplicateQuestionId(dup.id));
        }

        self.questions.iter().try_for_each(Question::check)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Get question by ID
    pub fn question(&self, question_id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id,
            title: self.title.clone(),
            author_username: self.author_username.clone(),
            question_count: self.questions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> Question {
        Question::new(
            "Capital of France?".to_string(),
            vec!["Paris".to_string(), "Lyon".to_string()],
            "Paris".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_question() {
        let question = capitals();
        assert_eq!(question.options.len(), 2);
        assert!(question.is_correct("Paris"));
        assert!(!question.is_correct("Lyon"));
        assert!(!question.is_correct("paris"));
    }

    #[test]
    fn test_question_rejects_unlisted_correct_option() {
        let result = Question::new(
            "Capital of France?".to_string(),
            vec!["Paris".to_string(), "Lyon".to_string()],
            "Nice".to_string(),
        );
        assert_eq!(
            result,
            Err(QuizError::CorrectOptionNotListed("Nice".to_string()))
        );
    }

    #[test]
    fn test_question_option_bounds() {
        let one = Question::new("Pick one".to_string(), vec!["A".into()], "A".into());
        assert_eq!(one, Err(QuizError::OptionCount(1)));

        let seven: Vec<String> = (0..7).map(|i| i.to_string()).collect();
        let many = Question::new("Pick one".to_string(), seven, "0".into());
        assert_eq!(many, Err(QuizError::OptionCount(7)));
    }

    #[test]
    fn test_question_rejects_duplicates() {
        let result = Question::new(
            "Capital of France?".to_string(),
            vec!["Paris".to_string(), "Paris".to_string()],
            "Paris".to_string(),
        );
        assert_eq!(result, Err(QuizError::DuplicateOption));
    }

    #[test]
    fn test_quiz_requires_questions() {
        let result = Quiz::new("Empty".to_string(), "quizmaster".to_string(), vec![]);
        assert_eq!(result, Err(QuizError::NoQuestions));
    }

    #[test]
    fn test_quiz_rejects_repeated_question_id() {
        let first = capitals();
        let second = Question::with_id(
            first.id,
            "Capital of Spain?".to_string(),
            vec!["Madrid".to_string(), "Porto".to_string()],
            "Madrid".to_string(),
        )
        .unwrap();
        let id = first.id;

        let result = Quiz::new("Capitals".to_string(), "quizmaster".to_string(), vec![first, second]);
        assert_eq!(result, Err(QuizError::DuplicateQuestionId(id)));
    }

    #[test]
    fn test_summary_and_lookup() {
        let question = capitals();
        let question_id = question.id;
        let quiz = Quiz::new("Geo".to_string(), "quizmaster".to_string(), vec![question]).unwrap();

        let summary = quiz.summary();
        assert_eq!(summary.id, quiz.id);
        assert_eq!(summary.question_count, 1);
        assert!(quiz.question(question_id).is_some());
        assert!(quiz.question(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let quiz = Quiz::new("Geo".to_string(), "quizmaster".to_string(), vec![capitals()]).unwrap();
        let json = serde_json::to_value(&quiz).unwrap();

        assert_eq!(json["authorUsername"], "quizmaster");
        assert_eq!(json["questions"][0]["correctOption"], "Paris");
    }
}
