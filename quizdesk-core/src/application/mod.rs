mod authoring;
mod commands;
mod event_loop;
mod events;
mod persistence;

pub use authoring::{publish_draft, AuthoringError};
pub use commands::{QuizCommand, SessionId};
pub use event_loop::QuizEventLoop;
pub use events::QuizEvent;
pub use persistence::save_result_best_effort;
