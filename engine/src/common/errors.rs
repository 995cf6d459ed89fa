use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading or interpreting a wal color scheme.
///
/// Scheme errors are the only failures in the engine that callers are
/// expected to surface to the user: a scheme that cannot be parsed or
/// contains malformed colors makes every downstream step meaningless.
///
/// # Examples
///
/// ```no_run
/// use engine::common::errors::SchemeError;
/// use engine::model::Rgb;
///
/// match Rgb::from_hex("#12345") {
///     Ok(rgb) => println!("parsed {rgb:?}"),
///     Err(SchemeError::InvalidColor { value, reason }) => {
///         eprintln!("'{value}' is not a color: {reason}");
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum SchemeError {
    /// A color string is not a `#rrggbb` hex triplet
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// The scheme document could not be parsed
    #[error("Failed to parse scheme: {0}")]
    Parse(#[source] serde_json::Error),

    /// The scheme could not be serialized for an external tool
    #[error("Failed to serialize scheme: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Failures of an external tool invocation.
///
/// The classification mirrors what a user can act on: the tool is not
/// installed, the tool ran and reported failure, the tool hung, or the
/// process could not be driven at all.
///
/// # Examples
///
/// ```no_run
/// use engine::common::errors::ToolError;
///
/// fn describe(error: &ToolError) -> &'static str {
///     match error {
///         ToolError::NotFound { .. } => "install the tool",
///         ToolError::NonZeroExit { .. } => "check the tool output",
///         ToolError::Timeout { .. } => "the tool hung",
///         ToolError::Io { .. } | ToolError::Prepare { .. } => "unexpected failure",
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ToolError {
    /// The program is not installed or not on `PATH`
    #[error("'{program}' was not found")]
    NotFound { program: String },

    /// The program ran but exited unsuccessfully
    #[error("'{program}' failed with exit code {}", format_exit_code(.code))]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The program did not finish in time and was killed
    #[error("'{program}' timed out after {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    /// Spawning or waiting on the program failed
    #[error("Failed to run '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Input files for the program could not be prepared
    #[error("Failed to prepare '{path}': {reason}")]
    Prepare { path: PathBuf, reason: String },
}

fn format_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "<terminated by signal>".to_string(),
    }
}

/// Errors raised while writing a palette swatch.
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error("Failed to write swatch: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a best-effort tool step.
///
/// Tool steps never propagate errors; they log what happened and report
/// the outcome so callers (and tests) can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The tool ran to completion
    Completed,
    /// The step was disabled by configuration
    Skipped,
    /// The tool is not installed
    Unavailable,
    /// The tool ran and failed, or could not be driven
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_exit_message_includes_code() {
        let error = ToolError::NonZeroExit {
            program: "matugen".to_string(),
            code: Some(2),
            stdout: String::new(),
            stderr: "bad image".to_string(),
        };
        assert_eq!(error.to_string(), "'matugen' failed with exit code 2");
    }

    #[test]
    fn test_signal_termination_message() {
        let error = ToolError::NonZeroExit {
            program: "wal".to_string(),
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(error.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_timeout_message() {
        let error = ToolError::Timeout {
            program: "wal".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert_eq!(error.to_string(), "'wal' timed out after 10s");
    }
}
