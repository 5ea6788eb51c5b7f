use cucumber::{given, then, when};
use quizdesk_core::{DraftQuiz, QuizStore, ValidationIssue};
use quizdesk_tests::QuizWorld;

fn split_options(options: &str) -> Vec<String> {
    options.split(',').map(str::to_string).collect()
}

fn issue_names(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(|i| format!("{:?}", i)).collect()
}

// ===== Given Steps =====

#[given(expr = "a draft titled {string} by {string}")]
async fn draft_titled(world: &mut QuizWorld, title: String, author: String) {
    let mut draft = DraftQuiz::new(author);
    draft.set_title(title);
    world.draft = Some(draft);
}

#[given(expr = "question {int} is {string} with options {string} and answer {string}")]
async fn question_is(
    world: &mut QuizWorld,
    number: usize,
    text: String,
    options: String,
    answer: String,
) {
    let draft = world.draft_mut();
    while draft.questions.len() < number {
        draft.add_question();
    }

    let index = number - 1;
    draft.set_question_text(index, text).unwrap();
    draft.set_correct_option(index, answer).unwrap();
    draft.questions[index].options = split_options(&options);
}

// ===== When Steps =====

#[when("the draft is validated")]
async fn draft_validated(world: &mut QuizWorld) {
    world.validate_draft();
}

#[when("the draft is published")]
async fn draft_published(world: &mut QuizWorld) {
    world.publish_draft().await;
}

// ===== Then Steps =====

#[then("the draft is valid")]
async fn draft_is_valid(world: &mut QuizWorld) {
    let report = world.report.as_ref().expect("Draft not validated");
    assert!(report.is_empty(), "Unexpected issues:\n{}", report);
}

#[then(expr = "the title issue is {string}")]
async fn title_issue_is(world: &mut QuizWorld, expected: String) {
    let report = world.report.as_ref().expect("Draft not validated");
    let actual = report.title_issue().map(|i| format!("{:?}", i));
    assert_eq!(actual.as_deref(), Some(expected.as_str()));
}

#[then("the title has no issue")]
async fn title_has_no_issue(world: &mut QuizWorld) {
    let report = world.report.as_ref().expect("Draft not validated");
    assert_eq!(report.title_issue(), None);
}

#[then(expr = "question {int} has issue {string}")]
async fn question_has_issue(world: &mut QuizWorld, number: usize, expected: String) {
    let report = world.report.as_ref().expect("Draft not validated");
    let names = issue_names(report.question_issues(number - 1));
    assert!(
        names.contains(&expected),
        "Question {} issues {:?} do not include {}",
        number,
        names,
        expected
    );
}

#[then(expr = "question {int} has no issues")]
async fn question_has_no_issues(world: &mut QuizWorld, number: usize) {
    let report = world.report.as_ref().expect("Draft not validated");
    assert!(report.question_issues(number - 1).is_empty());
}

#[then(expr = "the report lists {int} issue(s)")]
async fn report_lists_issues(world: &mut QuizWorld, count: usize) {
    let report = world.report.as_ref().expect("Draft not validated");
    assert_eq!(report.issue_count(), count);
}

#[then("publishing is rejected")]
async fn publishing_rejected(world: &mut QuizWorld) {
    world.publish_draft().await;
    let error = world.last_error_message().expect("Publishing should have failed");
    assert!(error.contains("issue"), "Unexpected error: {}", error);
}

#[then(expr = "the store holds {int} quiz(zes)")]
async fn store_holds(world: &mut QuizWorld, count: usize) {
    let quizzes = world.store.list_quizzes().await.unwrap();
    assert_eq!(quizzes.len(), count);
}

#[then(expr = "the published question {int} has options {string}")]
async fn published_options(world: &mut QuizWorld, number: usize, options: String) {
    let summary = world
        .store
        .list_quizzes()
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("Nothing published");
    let quiz = world.store.fetch_quiz(summary.id).await.unwrap();
    assert_eq!(quiz.questions[number - 1].options, split_options(&options));
}

#[then(expr = "the published question {int} has correct option {string}")]
async fn published_correct_option(world: &mut QuizWorld, number: usize, expected: String) {
    let summary = world
        .store
        .list_quizzes()
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("Nothing published");
    let quiz = world.store.fetch_quiz(summary.id).await.unwrap();
    assert_eq!(quiz.questions[number - 1].correct_option, expected);
}
