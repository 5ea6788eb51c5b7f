use crate::domain::{validate, Question, Quiz, QuizError, ValidationReport, MAX_OPTIONS, MIN_OPTIONS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of blank options a fresh draft question starts with
const DEFAULT_OPTION_SLOTS: usize = 4;

/// Authoring-time question; may be transiently invalid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuestion {
    #[serde(default)]
    pub text: String,

    /// Raw option inputs, blanks included
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub correct_option: String,
}

impl DraftQuestion {
    /// Empty question with the default number of option slots
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            options: vec![String::new(); DEFAULT_OPTION_SLOTS],
            correct_option: String::new(),
        }
    }

    /// Options with non-blank text, kept verbatim and in order
    pub fn filled_options(&self) -> Vec<&str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(|o| !o.trim().is_empty())
            .collect()
    }
}

/// Authoring-time quiz, edited freely and validated only on submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuiz {
    #[serde(default)]
    pub title: String,

    #[serde(default, alias = "username")]
    pub author_username: String,

    #[serde(default)]
    pub questions: Vec<DraftQuestion>,
}

/// Refused draft edits
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("At least one question is required")]
    LastQuestion,

    #[error("Maximum 6 options allowed per question")]
    TooManyOptions,

    #[error("At least 2 options are required")]
    TooFewOptions,

    #[error("Question {0} not found")]
    QuestionNotFound(usize),

    #[error("Option {option} of question {question} not found")]
    OptionNotFound { question: usize, option: usize },
}

/// Why a draft could not become a quiz
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("Quiz draft has {} issue(s)", .0.issue_count())]
    Invalid(ValidationReport),

    #[error("Quiz could not be built: {0}")]
    Malformed(#[from] QuizError),
}

impl DraftQuiz {
    /// New draft with a single blank question
    pub fn new(author_username: String) -> Self {
        Self {
            title: String::new(),
            author_username,
            questions: vec![DraftQuestion::blank()],
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append a blank question, returning its index
    pub fn add_question(&mut self) -> usize {
        self.questions.push(DraftQuestion::blank());
        self.questions.len() - 1
    }

    pub fn remove_question(&mut self, index: usize) -> Result<DraftQuestion, DraftError> {
        if index >= self.questions.len() {
            return Err(DraftError::QuestionNotFound(index));
        }
        if self.questions.len() <= 1 {
            return Err(DraftError::LastQuestion);
        }
        Ok(self.questions.remove(index))
    }

    pub fn set_question_text(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.question_mut(index)?.text = text.into();
        Ok(())
    }

    /// Append a blank option slot, returning its index
    pub fn add_option(&mut self, index: usize) -> Result<usize, DraftError> {
        let question = self.question_mut(index)?;
        if question.options.len() >= MAX_OPTIONS {
            return Err(DraftError::TooManyOptions);
        }
        question.options.push(String::new());
        Ok(question.options.len() - 1)
    }

    pub fn remove_option(&mut self, index: usize, option: usize) -> Result<String, DraftError> {
        let question = self.question_mut(index)?;
        if option >= question.options.len() {
            return Err(DraftError::OptionNotFound {
                question: index,
                option,
            });
        }
        if question.options.len() <= MIN_OPTIONS {
            return Err(DraftError::TooFewOptions);
        }
        Ok(question.options.remove(option))
    }

    pub fn set_option(
        &mut self,
        index: usize,
        option: usize,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let slot = self
            .question_mut(index)?
            .options
            .get_mut(option)
            .ok_or(DraftError::OptionNotFound {
                question: index,
                option,
            })?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_correct_option(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.question_mut(index)?.correct_option = value.into();
        Ok(())
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut DraftQuestion, DraftError> {
        self.questions
            .get_mut(index)
            .ok_or(DraftError::QuestionNotFound(index))
    }

    pub fn validate(&self) -> ValidationReport {
        validate(self)
    }

    /// Turn a valid draft into a quiz with fresh IDs.
    ///
    /// Blank options are dropped, and the title, question text and correct
    /// option are trimmed.
    pub fn publish(&self) -> Result<Quiz, PublishError> {
        let report = self.validate();
        if !report.is_empty() {
            return Err(PublishError::Invalid(report));
        }

        let questions = self
            .questions
            .iter()
            .map(|q| {
                Question::new(
                    q.text.trim().to_string(),
                    q.filled_options().into_iter().map(str::to_string).collect(),
                    q.correct_option.trim().to_string(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let quiz = Quiz::new(
            self.title.trim().to_string(),
            self.author_username.clone(),
            questions,
        )?;

        tracing::info!(quiz_id = %quiz.id, questions = quiz.question_count(), "Published quiz draft");
        Ok(quiz)
    }
}
