use crate::domain::{DraftQuestion, DraftQuiz, MAX_OPTIONS, MIN_OPTIONS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

const MIN_TITLE_CHARS: usize = 3;
const MIN_QUESTION_CHARS: usize = 5;

/// A single authoring problem, surfaced next to the offending field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Quiz title is required")]
    MissingTitle,

    #[error("Quiz title must be at least 3 characters long")]
    TitleTooShort,

    #[error("At least one question is required")]
    NoQuestions,

    #[error("Question text is required")]
    MissingQuestionText,

    #[error("Question must be at least 5 characters long")]
    QuestionTooShort,

    #[error("At least 2 options are required")]
    InsufficientOptions,

    #[error("Maximum 6 options allowed per question")]
    TooManyOptions,

    #[error("Options must be unique")]
    DuplicateOptions,

    #[error("Correct option is required")]
    MissingCorrectOption,

    #[error("Correct option must match one of the provided options")]
    CorrectOptionMismatch,
}

/// Structured result of validating a draft.
///
/// Empty means the draft may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<ValidationIssue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    quiz: Option<ValidationIssue>,

    /// Issues per question index (only questions with issues)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    questions: BTreeMap<usize, Vec<ValidationIssue>>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.quiz.is_none() && self.questions.is_empty()
    }

    pub fn title_issue(&self) -> Option<ValidationIssue> {
        self.title
    }

    pub fn quiz_issue(&self) -> Option<ValidationIssue> {
        self.quiz
    }

    /// Issues for one question (empty slice if it is fine)
    pub fn question_issues(&self, index: usize) -> &[ValidationIssue] {
        self.questions
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Indices of questions that have at least one issue
    pub fn invalid_questions(&self) -> impl Iterator<Item = usize> + '_ {
        self.questions.keys().copied()
    }

    /// Whether the issue occurs anywhere in the report
    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.title == Some(issue)
            || self.quiz == Some(issue)
            || self.questions.values().flatten().any(|i| *i == issue)
    }

    pub fn issue_count(&self) -> usize {
        usize::from(self.title.is_some())
            + usize::from(self.quiz.is_some())
            + self.questions.values().map(Vec::len).sum::<usize>()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(issue) = self.title {
            writeln!(f, "title: {}", issue)?;
        }
        if let Some(issue) = self.quiz {
            writeln!(f, "quiz: {}", issue)?;
        }
        for (index, issues) in &self.questions {
            for issue in issues {
                writeln!(f, "question {}: {}", index + 1, issue)?;
            }
        }
        Ok(())
    }
}

/// Validate a draft quiz.
///
/// Every check runs; nothing short-circuits across fields or questions.
pub fn validate(draft: &DraftQuiz) -> ValidationReport {
    let mut report = ValidationReport {
        title: check_title(&draft.title),
        ..Default::default()
    };

    if draft.questions.is_empty() {
        report.quiz = Some(ValidationIssue::NoQuestions);
    }

    for (index, question) in draft.questions.iter().enumerate() {
        let issues = check_question(question);
        if !issues.is_empty() {
            report.questions.insert(index, issues);
        }
    }

    tracing::debug!(issues = report.issue_count(), "Validated quiz draft");
    report
}

fn check_title(title: &str) -> Option<ValidationIssue> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Some(ValidationIssue::MissingTitle)
    } else if trimmed.chars().count() < MIN_TITLE_CHARS {
        Some(ValidationIssue::TitleTooShort)
    } else {
        None
    }
}

fn check_question(question: &DraftQuestion) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let text = question.text.trim();
    if text.is_empty() {
        issues.push(ValidationIssue::MissingQuestionText);
    } else if text.chars().count() < MIN_QUESTION_CHARS {
        issues.push(ValidationIssue::QuestionTooShort);
    }

    let filled = question.filled_options();
    if filled.len() < MIN_OPTIONS {
        issues.push(ValidationIssue::InsufficientOptions);
    }
    if filled.len() > MAX_OPTIONS {
        issues.push(ValidationIssue::TooManyOptions);
    }

    // Exact equality; whitespace variants count as distinct
    let distinct: HashSet<&str> = filled.iter().copied().collect();
    if distinct.len() != filled.len() {
        issues.push(ValidationIssue::DuplicateOptions);
    }

    let correct = question.correct_option.trim();
    if correct.is_empty() {
        issues.push(ValidationIssue::MissingCorrectOption);
    } else if !filled.contains(&correct) {
        issues.push(ValidationIssue::CorrectOptionMismatch);
    }

    issues
}
