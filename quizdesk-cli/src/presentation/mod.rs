pub mod completion;
pub mod input;
pub mod report;
pub mod runner;

pub use completion::finish_run;
pub use input::{parse_input, Input};
pub use report::{render_result, render_summaries, render_validation};
pub use runner::{QuizRunner, TakeOutcome};
