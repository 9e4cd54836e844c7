//! Metadata error types
//!
//! Error codes:
//! - STATBANK_METADATA_MISSING_CODE
//! - STATBANK_METADATA_EMPTY_VALUES
//! - STATBANK_METADATA_INVALID

use std::fmt;

/// Metadata-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataErrorCode {
    /// A variable descriptor has no code
    MissingCode,
    /// A variable descriptor has an empty value list
    EmptyValues,
    /// The document is structurally unusable
    Invalid,
}

impl MetadataErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            MetadataErrorCode::MissingCode => "STATBANK_METADATA_MISSING_CODE",
            MetadataErrorCode::EmptyValues => "STATBANK_METADATA_EMPTY_VALUES",
            MetadataErrorCode::Invalid => "STATBANK_METADATA_INVALID",
        }
    }
}

impl fmt::Display for MetadataErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Metadata error with context
#[derive(Debug, Clone)]
pub struct MetadataError {
    /// Error code
    code: MetadataErrorCode,
    /// Human-readable message
    message: String,
    /// Variable code if applicable
    variable: Option<String>,
}

impl MetadataError {
    /// Create a missing-code error for the variable at the given position
    pub fn missing_code(position: usize) -> Self {
        Self {
            code: MetadataErrorCode::MissingCode,
            message: format!("Variable at position {} has no code", position),
            variable: None,
        }
    }

    /// Create an empty-values error
    pub fn empty_values(variable: impl Into<String>) -> Self {
        let var = variable.into();
        Self {
            code: MetadataErrorCode::EmptyValues,
            message: format!("Variable '{}' has an empty value list", var),
            variable: Some(var),
        }
    }

    /// Create a duplicate-code error
    pub fn duplicate_code(variable: impl Into<String>) -> Self {
        let var = variable.into();
        Self {
            code: MetadataErrorCode::Invalid,
            message: format!("Variable code '{}' appears more than once", var),
            variable: Some(var),
        }
    }

    /// Create a generic invalid-document error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            code: MetadataErrorCode::Invalid,
            message: reason.into(),
            variable: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> MetadataErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the variable code if applicable
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for MetadataError {}

/// Result type for metadata operations
pub type MetadataResult<T> = Result<T, MetadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            MetadataErrorCode::MissingCode.code(),
            "STATBANK_METADATA_MISSING_CODE"
        );
        assert_eq!(
            MetadataErrorCode::EmptyValues.code(),
            "STATBANK_METADATA_EMPTY_VALUES"
        );
        assert_eq!(MetadataErrorCode::Invalid.code(), "STATBANK_METADATA_INVALID");
    }

    #[test]
    fn test_error_display() {
        let err = MetadataError::empty_values("Region");
        let display = format!("{}", err);
        assert!(display.contains("STATBANK_METADATA_EMPTY_VALUES"));
        assert!(display.contains("Region"));
    }

    #[test]
    fn test_error_carries_variable() {
        let err = MetadataError::empty_values("Tid");
        assert_eq!(err.variable(), Some("Tid"));
        assert_eq!(err.code(), MetadataErrorCode::EmptyValues);
    }
}
