//! Table metadata model
//!
//! In-memory representation of a StatBank table description: the ordered
//! list of variables, each with a code and its permissible values. The
//! variable order given by the source document determines dimension order
//! everywhere downstream, so it is preserved here and never resorted.

mod errors;
mod model;

pub use errors::{MetadataError, MetadataErrorCode, MetadataResult};
pub use model::{build_dimensions, Dimension, RawVariable, TableMetadata};
