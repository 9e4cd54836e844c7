//! Feed error types

use thiserror::Error;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors from parsing the publications feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed XML could not be parsed as RSS
    #[error("Invalid feed: {0}")]
    Parse(#[from] rss::Error),
}
