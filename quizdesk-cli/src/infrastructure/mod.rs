pub mod config;
pub mod error;
pub mod file_store;
pub mod observability;
pub mod result_forwarder;

pub use config::AppConfig;
pub use error::{CliError, Result};
pub use file_store::JsonFileStore;
pub use observability::LogConfig;
pub use result_forwarder::ResultForwarder;
