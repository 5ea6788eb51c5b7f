use crate::infrastructure::Result;
use crate::presentation::input::{option_label, parse_input, Input};
use crate::presentation::report::render_question;
use quizdesk_core::{Advance, QuizResult, QuizSession};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// How an interactive run ended
#[derive(Debug, Clone, PartialEq)]
pub enum TakeOutcome {
    Completed(QuizResult),
    /// The taker quit or input ended; nothing is scored or saved
    Abandoned,
}

const HELP: &str = "Type an option letter (or number) to choose it, \
n to go to the next question or submit, p to go back, q to quit.";

/// Drives a `QuizSession` from line-based input
pub struct QuizRunner<R, W> {
    input: R,
    output: W,
}

impl<R, W> QuizRunner<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self, session: &mut QuizSession) -> Result<TakeOutcome> {
        info!(quiz_id = %session.quiz().id, "Interactive run started");
        writeln!(self.output, "{}", session.quiz().title)?;
        writeln!(self.output, "{}", HELP)?;

        loop {
            let Some(question) = session.current_question() else {
                // Completed sessions are handed back from `advance`
                return Ok(session
                    .result()
                    .cloned()
                    .map_or(TakeOutcome::Abandoned, TakeOutcome::Completed));
            };
            let options = question.options.clone();
            let selected = session.ledger().answer(question.id);
            render_question(&mut self.output, session.progress(), question, selected)?;

            let hint = if session.is_last_question() { "submit" } else { "next" };
            write!(
                self.output,
                "[a-{}] choose, n {}, p back, q quit > ",
                option_label(options.len().saturating_sub(1)),
                hint
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                debug!("Input closed, abandoning run");
                return Ok(TakeOutcome::Abandoned);
            }

            match parse_input(&line) {
                Input::Choose(index) => match options.get(index) {
                    Some(option) => session.select_current(option.clone())?,
                    None => writeln!(self.output, "No option {}.", option_label(index))?,
                },
                Input::Next => match session.advance() {
                    Ok(Advance::MovedTo(_)) => {}
                    Ok(Advance::Completed(result)) => return Ok(TakeOutcome::Completed(result)),
                    Err(e) => writeln!(self.output, "{}", e)?,
                },
                Input::Previous => {
                    if let Err(e) = session.retreat() {
                        writeln!(self.output, "{}", e)?;
                    }
                }
                Input::Quit => {
                    info!("Run abandoned by taker");
                    return Ok(TakeOutcome::Abandoned);
                }
                Input::Help => writeln!(self.output, "{}", HELP)?,
                Input::Unknown(word) => {
                    writeln!(self.output, "Unrecognized input {:?}. Type h for help.", word)?
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizdesk_core::{Question, Quiz, SessionState, UserIdentity};

    fn session() -> QuizSession {
        let quiz = Quiz::new(
            "Capitals".to_string(),
            "quizmaster".to_string(),
            vec![
                Question::new(
                    "Capital of France?".into(),
                    vec!["Lyon".into(), "Paris".into()],
                    "Paris".into(),
                )
                .unwrap(),
                Question::new(
                    "Capital of Spain?".into(),
                    vec!["Madrid".into(), "Porto".into(), "Seville".into()],
                    "Madrid".into(),
                )
                .unwrap(),
            ],
        )
        .unwrap();
        QuizSession::start(quiz, UserIdentity::generate("student".to_string()).unwrap()).unwrap()
    }

    async fn run(script: &str, session: &mut QuizSession) -> (TakeOutcome, String) {
        let mut runner = QuizRunner::new(script.as_bytes(), Vec::new());
        let outcome = runner.run(session).await.unwrap();
        (outcome, String::from_utf8(runner.into_output()).unwrap())
    }

    #[tokio::test]
    async fn test_complete_run() {
        let mut session = session();
        let (outcome, output) = run("b\nn\na\nn\n", &mut session).await;

        match outcome {
            TakeOutcome::Completed(result) => {
                assert_eq!(result.score, 2);
                assert_eq!(result.percentage, 100);
            }
            other => panic!("Expected Completed, got {:?}", other),
        }
        assert!(output.contains("Question 2 of 2"));
        assert!(output.contains("n submit"));
    }

    #[tokio::test]
    async fn test_next_without_answer_is_refused() {
        let mut session = session();
        let (outcome, output) = run("n\nq\n", &mut session).await;

        assert_eq!(outcome, TakeOutcome::Abandoned);
        assert!(output.contains("Question 1 must be answered"));
        assert_eq!(session.state(), SessionState::InProgress { current_index: 0 });
    }

    #[tokio::test]
    async fn test_back_keeps_answers() {
        let mut session = session();
        let (_, output) = run("a\nn\np\nb\nn\nc\nn\n", &mut session).await;

        assert!(output.contains(" * a) Lyon"));
        let result = session.result().unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 50);
    }

    #[tokio::test]
    async fn test_back_on_first_question() {
        let mut session = session();
        let (_, output) = run("p\n", &mut session).await;
        assert!(output.contains("Already at the first question"));
    }

    #[tokio::test]
    async fn test_out_of_range_option() {
        let mut session = session();
        let (_, output) = run("c\nx\n", &mut session).await;

        assert!(output.contains("No option c."));
        assert!(output.contains("Unrecognized input \"x\""));
        assert!(session.ledger().is_empty());
    }

    #[tokio::test]
    async fn test_end_of_input_abandons() {
        let mut session = session();
        let (outcome, _) = run("b\n", &mut session).await;

        assert_eq!(outcome, TakeOutcome::Abandoned);
        assert!(!session.is_completed());
    }
}
