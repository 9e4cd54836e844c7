//! Observability for statbank
//!
//! Structured JSON logging only. Every log line is one self-contained
//! JSON event with an explicit severity.

mod logger;

pub use logger::{Logger, Severity};
