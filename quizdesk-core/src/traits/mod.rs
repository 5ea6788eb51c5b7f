mod store;

pub use store::{QuizStore, ResultStore, StoreError};
