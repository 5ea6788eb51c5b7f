use crate::infrastructure::{CliError, LogConfig, Result};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "quizdesk.json";

/// Resolved runtime settings shared by all subcommands
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON document holding quizzes and results
    pub data_file: PathBuf,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log: LogConfig::interactive(),
        }
    }
}

impl AppConfig {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data_file,
            ..Default::default()
        }
    }

    /// Apply the `--log-level` flag, accepting any case
    pub fn with_log_level(mut self, level: &str) -> Result<Self> {
        let level = level
            .parse::<tracing::Level>()
            .map_err(|_| CliError::InvalidConfig(format!("Unknown log level: {}", level)))?;
        self.log = self.log.with_level(level);
        Ok(self)
    }

    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        if enabled {
            self.log = self.log.with_json();
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::InvalidConfig(
                "Data file path must not be empty".to_string(),
            ));
        }
        if self.data_file.is_dir() {
            return Err(CliError::InvalidConfig(format!(
                "Data file {} is a directory",
                self.data_file.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.data_file, PathBuf::from("quizdesk.json"));
        assert_eq!(config.log.default_level, tracing::Level::WARN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        let config = AppConfig::default().with_log_level("debug").unwrap();
        assert_eq!(config.log.default_level, tracing::Level::DEBUG);

        let err = AppConfig::default().with_log_level("loud").unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn test_json_logs() {
        assert!(AppConfig::default().with_json_logs(true).log.json_format);
        assert!(!AppConfig::default().with_json_logs(false).log.json_format);
    }

    #[test]
    fn test_empty_data_file_rejected() {
        let config = AppConfig::new(PathBuf::new());
        assert!(matches!(
            config.validate(),
            Err(CliError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_directory_data_file_rejected() {
        let config = AppConfig::new(std::env::temp_dir());
        assert!(config.validate().is_err());
    }
}
