use super::app::AppConfig;
use super::limits::LOG_LEVELS;
use crate::error::AppError;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid {key}: {configured} (min: {min_limit}, max: {max_limit})")]
    ToolTimeout {
        key: String,
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid {key}: program name cannot be empty")]
    EmptyProgram { key: String },
    #[error("Invalid logging.level: '{configured}'")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::ToolTimeout {
                key,
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tool timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update {key} in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::EmptyProgram { key } => {
                format!(
                    "Program name is empty!\n\n\
                    Please set {key} in config.toml to the name or path of the executable."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level: '{configured}'\n\n\
                    Valid levels: {}\n\n\
                    Please update logging.level in config.toml.",
                    LOG_LEVELS.join(", ")
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    /// Turn the load result into a validated configuration
    pub fn into_validated(self) -> Result<AppConfig, AppError> {
        match self {
            ConfigLoadResult::Success(config) => {
                if let Err(validation_errors) = config.validate() {
                    let error_messages: Vec<String> =
                        validation_errors.iter().map(|e| e.user_message()).collect();
                    return Err(AppError::Config(format!(
                        "Configuration validation failed:\n{}",
                        error_messages.join("\n\n")
                    )));
                }
                Ok(*config)
            }
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(AppError::Config(msg))
            }
        }
    }
}
