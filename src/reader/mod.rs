//! The table reader
//!
//! Composes metadata, partitioning, fetching, and reassembly into the
//! end-to-end "read whole table" operation. The remote service is reached
//! through the `TableSource` trait so tests can substitute a fake without
//! touching global state. A table under the cap runs through the same
//! one-element pipeline as a partitioned one.

mod errors;
mod reader;
mod source;

pub use errors::ReadError;
pub use reader::TableReader;
pub use source::TableSource;
