use crate::presentation::input::option_label;
use quizdesk_core::domain::ReviewItem;
use quizdesk_core::{Question, QuizResult, QuizSummary, ValidationReport};
use std::io::{self, Write};

pub fn render_summaries<W: Write>(out: &mut W, summaries: &[QuizSummary]) -> io::Result<()> {
    if summaries.is_empty() {
        return writeln!(out, "No quizzes published yet.");
    }

    for summary in summaries {
        writeln!(
            out,
            "{}  {} by {} ({} question{})",
            summary.id,
            summary.title,
            summary.author_username,
            summary.question_count,
            if summary.question_count == 1 { "" } else { "s" }
        )?;
    }
    Ok(())
}

pub fn render_validation<W: Write>(out: &mut W, report: &ValidationReport) -> io::Result<()> {
    if report.is_empty() {
        return writeln!(out, "Draft is valid.");
    }
    write!(out, "{}", report)?;
    writeln!(out, "{} issue(s) found.", report.issue_count())
}

/// Question block with the current selection marked
pub fn render_question<W: Write>(
    out: &mut W,
    (position, total): (usize, usize),
    question: &Question,
    selected: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {} of {}", position, total)?;
    writeln!(out, "{}", question.text)?;
    for (index, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(option.as_str()) { '*' } else { ' ' };
        writeln!(out, " {} {}) {}", marker, option_label(index), option)?;
    }
    Ok(())
}

pub fn render_result<W: Write>(
    out: &mut W,
    result: &QuizResult,
    review: &[ReviewItem],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}: completed by {}", result.quiz_title, result.username)?;
    writeln!(
        out,
        "Score: {}/{} ({}%)",
        result.score, result.total_questions, result.percentage
    )?;
    if let Some(seconds) = result.time_taken_seconds {
        writeln!(out, "Time taken: {}m {:02}s", seconds / 60, seconds % 60)?;
    }

    writeln!(out)?;
    for item in review {
        writeln!(out, "{}. {}", item.index + 1, item.question_text)?;
        let selected = item.selected.as_deref().unwrap_or("(no answer)");
        if item.is_correct {
            writeln!(out, "   your answer: {} (correct)", selected)?;
        } else {
            writeln!(
                out,
                "   your answer: {} (correct answer: {})",
                selected, item.correct_option
            )?;
        }
    }
    Ok(())
}
