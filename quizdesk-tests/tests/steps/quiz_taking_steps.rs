use cucumber::{given, then, when};
use quizdesk_core::{QuizCommand, QuizEvent, SessionState};
use quizdesk_tests::QuizWorld;

// ===== Given Steps =====

#[given(expr = "a quiz {string} with correct answers {string}")]
async fn quiz_with_answers(world: &mut QuizWorld, title: String, answers: String) {
    let answers: Vec<&str> = answers.split(',').collect();
    world.quiz = Some(QuizWorld::quiz_with_answers(&title, &answers));
}

#[given(expr = "{string} has started the quiz")]
async fn has_started_quiz(world: &mut QuizWorld, username: String) {
    let event = world.start_session(&username).clone();
    assert!(
        matches!(event, QuizEvent::SessionStarted { .. }),
        "Expected SessionStarted, got {:?}",
        event
    );
}

#[given(expr = "they have answered {string}")]
async fn have_answered(world: &mut QuizWorld, picks: String) {
    for pick in picks.split(',') {
        world.select(pick);
        let session_id = world.session_id();
        let event = world.execute(QuizCommand::Advance { session_id });
        assert!(
            !matches!(event, QuizEvent::CommandFailed { .. }),
            "Advance failed: {:?}",
            event
        );
    }
}

// ===== When Steps =====

#[when(expr = "{string} starts the quiz")]
async fn starts_quiz(world: &mut QuizWorld, username: String) {
    world.start_session(&username);
}

#[when(expr = "they select {string}")]
async fn select(world: &mut QuizWorld, option: String) {
    world.select(&option);
}

#[when(expr = "they select {string} for question {int}")]
async fn select_for_question(world: &mut QuizWorld, option: String, number: usize) {
    let session_id = world.session_id();
    let question_id = world.quiz.as_ref().expect("No quiz available").questions[number - 1].id;
    world.execute(QuizCommand::SelectAnswer {
        session_id,
        question_id,
        option,
    });
}

#[when("they advance")]
async fn advance(world: &mut QuizWorld) {
    let session_id = world.session_id();
    world.execute(QuizCommand::Advance { session_id });
}

#[when("they go back")]
async fn go_back(world: &mut QuizWorld) {
    let session_id = world.session_id();
    world.execute(QuizCommand::Retreat { session_id });
}

#[when("they abandon the quiz")]
async fn abandon(world: &mut QuizWorld) {
    let session_id = world.session_id();
    world.execute(QuizCommand::AbandonSession { session_id });
}

// ===== Then Steps =====

#[then(expr = "they are on question {int}")]
async fn on_question(world: &mut QuizWorld, number: usize) {
    let session = world.session().expect("Session missing");
    assert_eq!(
        session.state(),
        SessionState::InProgress {
            current_index: number - 1
        }
    );
}

#[then(expr = "the answer to question {int} is {string}")]
async fn answer_is(world: &mut QuizWorld, number: usize, expected: String) {
    let session = world.session().expect("Session missing");
    let question_id = session.quiz().questions[number - 1].id;
    assert_eq!(session.ledger().answer(question_id), Some(expected.as_str()));
}

#[then(expr = "{int} answer(s) is/are recorded")]
async fn answers_recorded(world: &mut QuizWorld, count: usize) {
    let session = world.session().expect("Session missing");
    assert_eq!(session.ledger().len(), count);
}

#[then(expr = "the command fails with {string}")]
async fn command_fails(world: &mut QuizWorld, fragment: String) {
    assert!(world.last_command_failed(), "Last command succeeded");
    let reason = world.last_error_message().unwrap_or_default();
    assert!(
        reason.contains(&fragment),
        "Reason {:?} does not contain {:?}",
        reason,
        fragment
    );
}

#[then(expr = "the quiz is completed with score {int} and {int} percent")]
async fn completed_with(world: &mut QuizWorld, score: u32, percentage: u8) {
    let result = world.result.as_ref().expect("No result emitted");
    assert_eq!(result.score, score);
    assert_eq!(result.percentage, percentage);

    let quiz = world.quiz.as_ref().expect("No quiz available");
    assert_eq!(result.total_questions as usize, quiz.question_count());
}

#[then("the completed session is closed")]
async fn completed_session_closed(world: &mut QuizWorld) {
    assert!(world.result.is_some(), "Quiz not completed");
    assert!(world.session().is_none());
    assert_eq!(world.event_loop.session_count(), 0);
}

#[then(expr = "the review marks question {int} as correct")]
async fn review_correct(world: &mut QuizWorld, number: usize) {
    let review = world.review.as_ref().expect("No review emitted");
    assert!(review[number - 1].is_correct);
}

#[then(expr = "the review marks question {int} as wrong with correct answer {string}")]
async fn review_wrong(world: &mut QuizWorld, number: usize, correct: String) {
    let review = world.review.as_ref().expect("No review emitted");
    let item = &review[number - 1];
    assert!(!item.is_correct);
    assert_eq!(item.correct_option, correct);
}

#[then(expr = "the quiz has {int} question(s)")]
async fn quiz_has_questions(world: &mut QuizWorld, count: usize) {
    match world.last_event.as_ref() {
        Some(QuizEvent::SessionStarted { question_count, .. }) => assert_eq!(*question_count, count),
        other => panic!("Expected SessionStarted, got {:?}", other),
    }
}

#[then("the session is gone")]
async fn session_gone(world: &mut QuizWorld) {
    assert!(world.session().is_none());
    assert_eq!(world.event_loop.session_count(), 0);
}
