pub mod cursor;
pub mod draft;
pub mod ledger;
pub mod quiz;
pub mod result;
pub mod session;
pub mod user;
pub mod validation;

pub use cursor::NavigationCursor;
pub use draft::{DraftError, DraftQuestion, DraftQuiz, PublishError};
pub use ledger::AnswerLedger;
pub use quiz::{Question, QuestionId, Quiz, QuizError, QuizId, QuizSummary, MAX_OPTIONS, MIN_OPTIONS};
pub use result::{QuizResult, Score};
pub use session::{Advance, QuizSession, ReviewItem, SessionError, SessionState};
pub use user::{UserError, UserIdentity};
pub use validation::{validate, ValidationIssue, ValidationReport};
