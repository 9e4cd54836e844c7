//! StatBank HTTP client
//!
//! Thin wrappers over the StatBank v0 API: keyword search, table
//! description, table data (json-stat2), and the publications feed. The
//! reqwest handle is built per logical call rather than held as a
//! process-wide singleton, so callers and tests control transport scope.

mod config;
mod errors;
mod http;
mod request;

pub use config::ClientConfig;
pub use errors::{ClientError, ClientResult};
pub use http::StatbankClient;
pub use request::{DataRequest, QueryVariable, ResponseFormat, Selection};
