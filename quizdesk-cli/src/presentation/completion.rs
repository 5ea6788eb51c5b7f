use crate::infrastructure::{ResultForwarder, Result};
use crate::presentation::report::render_result;
use quizdesk_core::{QuizResult, QuizSession, ResultStore};
use std::io::Write;
use std::sync::Arc;

/// Show the score and review, then save the result in the background.
///
/// Save failures are logged by the forwarder and never shown to the taker.
/// Pending saves are awaited only so they land before the process exits.
pub async fn finish_run<W: Write>(
    out: &mut W,
    store: Arc<dyn ResultStore>,
    session: &QuizSession,
    result: QuizResult,
) -> Result<()> {
    let review = session.review()?;
    render_result(out, &result, &review)?;
    out.flush()?;

    let mut forwarder = ResultForwarder::new(store);
    forwarder.forward(result);
    forwarder.flush().await;
    Ok(())
}
