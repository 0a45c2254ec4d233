//! Error handling for the LuckPerms configuration primitives

use std::num::ParseIntError;
use thiserror::Error;

/// Failure to turn a human-authored duration string into a [`std::time::Duration`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    /// No position in the input produced a non-empty match
    #[error("unable to parse duration: {input}")]
    InvalidFormat { input: String },

    /// A matched quantity does not fit the supported integer range
    #[error("unable to parse duration: {input} (quantity '{quantity}' is out of range)")]
    QuantityOutOfRange {
        input: String,
        quantity: String,
        #[source]
        source: ParseIntError,
    },
}

impl DurationParseError {
    /// Create an invalid-format error for the given input
    pub fn invalid_format<S: Into<String>>(input: S) -> Self {
        Self::InvalidFormat { input: input.into() }
    }

    /// The original input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input } | Self::QuantityOutOfRange { input, .. } => input,
        }
    }
}

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parsing errors (durations, JSON, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Parse(_) => "PARSE",
            Self::Io(_) => "IO",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!(
                    "Configuration problem: {}\n\n\
                     Suggestion: Check your .env file and LUCKPERMS_* environment variables.",
                    msg
                )
            }
            Self::Parse(msg) => {
                format!(
                    "Failed to parse input: {}\n\n\
                     Suggestion: Durations look like '1y6mo2w3d', '5 minutes, 30 seconds' or '45'.",
                    msg
                )
            }
            Self::Io(msg) => {
                format!(
                    "File operation failed: {}\n\n\
                     Suggestion: Check file permissions and that the path exists.",
                    msg
                )
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Parse(_) => 1,
            Self::Io(_) => 5,
        }
    }
}

impl From<DurationParseError> for AppError {
    fn from(error: DurationParseError) -> Self {
        Self::parse(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_error_carries_input() {
        let error = DurationParseError::invalid_format("not a duration");
        assert_eq!(error.input(), "not a duration");
        assert_eq!(error.to_string(), "unable to parse duration: not a duration");

        let source = "99999999999".parse::<i32>().unwrap_err();
        let error = DurationParseError::QuantityOutOfRange {
            input: "99999999999d".to_string(),
            quantity: "99999999999".to_string(),
            source,
        };
        assert_eq!(error.input(), "99999999999d");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_creation() {
        let config_error = AppError::config("Invalid configuration");
        assert_eq!(config_error.category(), "CONFIG");
        assert_eq!(config_error.exit_code(), 1);

        let io_error = AppError::io("disk gone");
        assert_eq!(io_error.category(), "IO");
        assert_eq!(io_error.exit_code(), 5);
    }

    #[test]
    fn test_duration_error_conversion() {
        let error: AppError = DurationParseError::invalid_format("abc").into();
        assert_eq!(error.category(), "PARSE");
        assert!(error.to_string().contains("unable to parse duration: abc"));
        assert!(error.user_friendly_message().contains("1y6mo2w3d"));
    }

    #[test]
    fn test_error_display() {
        let error = AppError::config("Test configuration error");
        let display = error.to_string();
        assert!(display.contains("Configuration error"));
        assert!(display.contains("Test configuration error"));
    }
}
