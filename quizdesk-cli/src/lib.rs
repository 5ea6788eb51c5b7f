pub mod infrastructure;
pub mod presentation;

pub use infrastructure::{AppConfig, CliError, JsonFileStore, LogConfig, Result};
