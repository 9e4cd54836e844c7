//! Client error types

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from talking to the StatBank API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote service answered with a non-success status
    #[error("Remote service returned status {status}: {body}")]
    RemoteStatus {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The request could not be sent or the response not read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON
    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Status code of the remote failure, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RemoteStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
