//! CLI-specific error types

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Invalid command argument
    InvalidArgument,
    /// Async runtime could not be built
    RuntimeError,
    /// The requested operation failed
    CommandFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "STATBANK_CLI_CONFIG_ERROR",
            Self::InvalidArgument => "STATBANK_CLI_INVALID_ARGUMENT",
            Self::RuntimeError => "STATBANK_CLI_RUNTIME_ERROR",
            Self::CommandFailed => "STATBANK_CLI_COMMAND_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Invalid argument
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArgument, msg)
    }

    /// Runtime bootstrap failure
    pub fn runtime_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RuntimeError, msg)
    }

    /// Operation failure
    pub fn command_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::CommandFailed, msg)
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CliErrorCode::ConfigError.code(),
            "STATBANK_CLI_CONFIG_ERROR"
        );
        assert_eq!(
            CliErrorCode::CommandFailed.code(),
            "STATBANK_CLI_COMMAND_FAILED"
        );
    }

    #[test]
    fn test_error_display() {
        let err = CliError::config_error("missing file");
        let display = format!("{}", err);
        assert!(display.contains("STATBANK_CLI_CONFIG_ERROR"));
        assert!(display.contains("missing file"));
    }
}
