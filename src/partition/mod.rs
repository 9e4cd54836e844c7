//! Query partitioning
//!
//! The data endpoint rejects selections above a fixed cell cap. This module
//! turns one over-large query into an ordered list of queries, each under
//! the cap, by recursively halving the largest dimension. The returned list,
//! executed and concatenated in order, reconstructs exactly the original
//! cross-product: each split covers disjoint, exhaustive value sub-ranges of
//! the split dimension while every other dimension is copied unchanged.
//!
//! All functions here are pure; no I/O, no shared state.

mod errors;
mod query;
mod splitter;

pub use errors::{PartitionError, PartitionErrorCode, PartitionResult};
pub use query::Query;
pub use splitter::{partition, DEFAULT_CELL_CAP};
