//! Partitioner error types
//!
//! Error codes:
//! - STATBANK_QUERY_UNSPLITTABLE

use std::fmt;

/// Partitioner-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionErrorCode {
    /// The query exceeds the cap but no dimension can be halved further
    Unsplittable,
}

impl PartitionErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            PartitionErrorCode::Unsplittable => "STATBANK_QUERY_UNSPLITTABLE",
        }
    }
}

impl fmt::Display for PartitionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Partitioner error with context
#[derive(Debug, Clone)]
pub struct PartitionError {
    /// Error code
    code: PartitionErrorCode,
    /// Human-readable message
    message: String,
    /// Offending dimension code if applicable
    dimension: Option<String>,
    /// Value count of the offending dimension
    dimension_size: Option<usize>,
}

impl PartitionError {
    /// Create an unsplittable error for a dimension that cannot be halved
    pub fn unsplittable(
        dimension: impl Into<String>,
        dimension_size: usize,
        cardinality: u64,
        cap: u64,
    ) -> Self {
        let dim = dimension.into();
        Self {
            code: PartitionErrorCode::Unsplittable,
            message: format!(
                "Dimension '{}' has {} value(s) and cannot be halved, \
                 but the query still selects {} cells (cap {})",
                dim, dimension_size, cardinality, cap
            ),
            dimension: Some(dim),
            dimension_size: Some(dimension_size),
        }
    }

    /// Create an unsplittable error for a query with no dimensions at all
    pub fn no_dimensions(cardinality: u64, cap: u64) -> Self {
        Self {
            code: PartitionErrorCode::Unsplittable,
            message: format!(
                "Query has no dimensions to split but selects {} cells (cap {})",
                cardinality, cap
            ),
            dimension: None,
            dimension_size: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> PartitionErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending dimension code if applicable
    pub fn dimension(&self) -> Option<&str> {
        self.dimension.as_deref()
    }

    /// Returns the offending dimension's value count if applicable
    pub fn dimension_size(&self) -> Option<usize> {
        self.dimension_size
    }
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for PartitionError {}

/// Result type for partitioner operations
pub type PartitionResult<T> = Result<T, PartitionError>;
