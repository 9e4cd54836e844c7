//! Recursive bisection of over-cap queries
//!
//! Splitting strategy:
//! 1. A query at or under the cap is returned as-is (terminal case).
//! 2. Otherwise the dimension with the most values is halved at the
//!    midpoint; ties break to the first such dimension in source order so
//!    partitioning is reproducible.
//! 3. Both halves are partitioned independently; results concatenate in
//!    first-half-then-second-half order.
//!
//! A query over the cap whose largest dimension holds a single value cannot
//! be reduced any further. Recursing there would never terminate, so the
//! split fails fast with the offending dimension instead.

use super::errors::{PartitionError, PartitionResult};
use super::query::Query;

/// Maximum number of data cells the data endpoint accepts per request
pub const DEFAULT_CELL_CAP: u64 = 300_000;

/// Splits a query into an ordered list of queries, each within the cap.
///
/// The returned queries, executed and concatenated in order, reconstruct
/// exactly the original cross-product with no cell omitted or duplicated.
pub fn partition(query: Query, cap: u64) -> PartitionResult<Vec<Query>> {
    let cardinality = query.cardinality();
    if cardinality <= cap {
        return Ok(vec![query]);
    }

    let split_at = match largest_dimension(&query) {
        Some(index) => index,
        None => return Err(PartitionError::no_dimensions(cardinality, cap)),
    };

    let size = query.dimensions[split_at].len();
    if size < 2 {
        let code = query.dimensions[split_at].code.clone();
        return Err(PartitionError::unsplittable(code, size, cardinality, cap));
    }

    let (first, second) = bisect(query, split_at);

    let mut queries = partition(first, cap)?;
    queries.extend(partition(second, cap)?);
    Ok(queries)
}

/// Index of the dimension with the most values; first wins on ties
fn largest_dimension(query: &Query) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, dim) in query.dimensions.iter().enumerate() {
        match best {
            Some(current) if dim.len() <= query.dimensions[current].len() => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Splits the dimension at `index` at its midpoint, leaving the rest intact
fn bisect(query: Query, index: usize) -> (Query, Query) {
    let mid = query.dimensions[index].len() / 2;

    let mut first = query.clone();
    first.dimensions[index].values.truncate(mid);

    let mut second = query;
    second.dimensions[index].values.drain(..mid);

    (first, second)
}
