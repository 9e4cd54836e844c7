//! CLI module for statbank
//!
//! Provides the command-line interface:
//! - serve: start the HTTP tool server
//! - read: read a whole table, partitioning as needed
//! - metadata: fetch a raw table description
//! - search: search tables by keyword
//! - publications: list the latest StatBank publications

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
