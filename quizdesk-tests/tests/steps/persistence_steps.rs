use async_trait::async_trait;
use cucumber::{given, then, when};
use quizdesk_core::{save_result_best_effort, QuizResult, ResultStore, StoreError};
use quizdesk_tests::QuizWorld;

/// Result sink that always fails, like an unreachable backend
struct OfflineStore;

#[async_trait]
impl ResultStore for OfflineStore {
    async fn save_result(&self, _result: QuizResult) -> Result<(), StoreError> {
        Err(StoreError::Internal("backend unreachable".to_string()))
    }
}

#[given("the result store is offline")]
async fn store_offline(world: &mut QuizWorld) {
    world.store_offline = true;
}

#[when("the result is saved")]
async fn result_saved(world: &mut QuizWorld) {
    let result = world.result.clone().expect("No result emitted");
    world.saved = Some(if world.store_offline {
        save_result_best_effort(&OfflineStore, &result).await
    } else {
        save_result_best_effort(&world.store, &result).await
    });
}

#[then(expr = "the store holds {int} result(s)")]
async fn store_holds_results(world: &mut QuizWorld, count: usize) {
    assert_eq!(world.store.results().unwrap().len(), count);
}

#[then("the save is acknowledged")]
async fn save_acknowledged(world: &mut QuizWorld) {
    assert_eq!(world.saved, Some(true));
}

#[then("the save failure is swallowed")]
async fn save_swallowed(world: &mut QuizWorld) {
    assert_eq!(world.saved, Some(false));
    // The locally computed result is untouched
    assert!(world.result.is_some());
}
