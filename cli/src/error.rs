use crate::config::setup::SetupError;
use engine::common::errors::{SchemeError, SwatchError};
use std::fmt::Display;

/// Application-wide error types for the hueshift command line.
///
/// Only problems the user has to fix end up here: broken configuration,
/// unreadable or malformed scheme files, and terminal/file I/O. Failures
/// of pywal and matugen are deliberately absent; those steps are
/// best-effort and report through [`engine::ToolOutcome`] instead.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Scheme`] - Scheme files that are missing, unreadable or invalid
/// - [`Setup`] - First-run directory and file creation failures
/// - [`Io`] - Terminal output and other I/O failures
///
/// # Examples
///
/// ```no_run
/// use hueshift::error::{AppError, AppResult};
///
/// fn load(path: &str) -> AppResult<String> {
///     std::fs::read_to_string(path)
///         .map_err(|e| AppError::Scheme(format!("Failed to read scheme file '{path}': {e}")))
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Scheme`]: AppError::Scheme
/// [`Setup`]: AppError::Setup
/// [`Io`]: AppError::Io
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// Raised when `config.toml` or the environment cannot be read,
    /// deserialized, or contains values outside the accepted limits.
    Config(String),

    /// Scheme file errors.
    ///
    /// Raised when a light or dark scheme cannot be located, parsed or
    /// fails validation. Without both schemes nothing can be applied.
    Scheme(String),

    /// First-run setup errors.
    Setup(String),

    /// Terminal and file I/O errors.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Scheme(msg) => write!(f, "Scheme Error: {msg}"),
            AppError::Setup(msg) => write!(f, "Setup Error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<SchemeError> for AppError {
    fn from(err: SchemeError) -> Self {
        AppError::Scheme(err.to_string())
    }
}

impl From<SwatchError> for AppError {
    fn from(err: SwatchError) -> Self {
        match err {
            SwatchError::Scheme(e) => AppError::Scheme(e.to_string()),
            SwatchError::Io(e) => AppError::Io(e.to_string()),
        }
    }
}

impl From<SetupError> for AppError {
    fn from(err: SetupError) -> Self {
        AppError::Setup(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
