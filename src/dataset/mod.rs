//! Dataset decoding and reassembly
//!
//! Each sub-query answers with a json-stat2 payload. Decoding tabulates the
//! payload into rows; assembly concatenates the per-sub-query tables in
//! partition order into one dataset. The first non-empty sub-table fixes the
//! column schema and every later one must match it exactly.

mod assemble;
mod errors;
mod jsonstat;
mod table;

pub use assemble::assemble;
pub use errors::{DatasetError, DatasetErrorCode, DatasetResult};
pub use jsonstat::decode;
pub use table::Dataset;
