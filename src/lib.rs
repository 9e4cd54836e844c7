//! statbank - A partitioning client and tool server for the Statistics
//! Norway StatBank API
//!
//! The StatBank data endpoint caps each request at a fixed number of data
//! cells. Reading a whole table therefore splits the selection into
//! sub-queries under the cap, fetches each one, and reassembles the decoded
//! results in partition order.

pub mod cli;
pub mod client;
pub mod dataset;
pub mod feed;
pub mod metadata;
pub mod observability;
pub mod partition;
pub mod reader;
pub mod server;
