//! Dataset error types
//!
//! Error codes:
//! - STATBANK_DATASET_DECODE
//! - STATBANK_DATASET_SHAPE
//! - STATBANK_DATASET_SCHEMA_MISMATCH

use std::fmt;

/// Dataset-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorCode {
    /// The payload is not valid json-stat2
    Decode,
    /// The payload decoded but its pieces disagree on shape
    Shape,
    /// A sub-dataset's columns differ from the established schema
    SchemaMismatch,
}

impl DatasetErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            DatasetErrorCode::Decode => "STATBANK_DATASET_DECODE",
            DatasetErrorCode::Shape => "STATBANK_DATASET_SHAPE",
            DatasetErrorCode::SchemaMismatch => "STATBANK_DATASET_SCHEMA_MISMATCH",
        }
    }
}

impl fmt::Display for DatasetErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dataset error with context
#[derive(Debug, Clone)]
pub struct DatasetError {
    /// Error code
    code: DatasetErrorCode,
    /// Human-readable message
    message: String,
    /// Sub-dataset position in partition order, if applicable
    position: Option<usize>,
}

impl DatasetError {
    /// Create a decode error
    pub fn decode(reason: impl Into<String>) -> Self {
        Self {
            code: DatasetErrorCode::Decode,
            message: reason.into(),
            position: None,
        }
    }

    /// Create a shape error
    pub fn shape(reason: impl Into<String>) -> Self {
        Self {
            code: DatasetErrorCode::Shape,
            message: reason.into(),
            position: None,
        }
    }

    /// Create a schema mismatch error for the sub-dataset at `position`
    pub fn schema_mismatch(position: usize, expected: &[String], actual: &[String]) -> Self {
        Self {
            code: DatasetErrorCode::SchemaMismatch,
            message: format!(
                "Sub-dataset {} has columns [{}], expected [{}]",
                position,
                actual.join(", "),
                expected.join(", ")
            ),
            position: Some(position),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> DatasetErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the sub-dataset position if applicable
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for DatasetError {}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
