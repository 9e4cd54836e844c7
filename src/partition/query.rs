//! The query type: one request-shaped selection over every dimension

use crate::metadata::Dimension;

/// A partition unit: a selection covering every dimension of a table.
///
/// Each dimension's `values` may be a sub-range of the full metadata values
/// for that code; the set of dimension codes is always the full set for the
/// table. Only value sets shrink under partitioning, never the dimension set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Dimensions in source metadata order
    pub dimensions: Vec<Dimension>,
}

impl Query {
    /// Creates a query selecting the given dimensions
    pub fn new(dimensions: Vec<Dimension>) -> Self {
        Self { dimensions }
    }

    /// Total number of data cells this query would return.
    ///
    /// The product saturates instead of wrapping so the comparison against
    /// the cap stays correct for pathological metadata.
    pub fn cardinality(&self) -> u64 {
        self.dimensions
            .iter()
            .fold(1u64, |acc, dim| acc.saturating_mul(dim.len() as u64))
    }

    /// Number of dimensions
    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }
}
