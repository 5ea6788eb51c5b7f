use quizdesk_core::{save_result_best_effort, QuizResult, ResultStore};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Ships completed results to a store in the background.
///
/// The caller never waits on a save and never sees its failure. `flush` lets
/// a short-lived process give pending saves a chance to land before exit.
pub struct ResultForwarder {
    store: Arc<dyn ResultStore>,
    pending: Vec<JoinHandle<bool>>,
}

impl ResultForwarder {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self {
            store,
            pending: Vec::new(),
        }
    }

    pub fn forward(&mut self, result: QuizResult) {
        let store = Arc::clone(&self.store);
        let handle = tokio::spawn(async move { save_result_best_effort(store.as_ref(), &result).await });
        self.pending.push(handle);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Wait for outstanding saves, returning how many succeeded
    pub async fn flush(&mut self) -> usize {
        let mut saved = 0;
        for handle in self.pending.drain(..) {
            match handle.await {
                Ok(true) => saved += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(error = %e, "Result save task did not finish"),
            }
        }
        saved
    }
}
