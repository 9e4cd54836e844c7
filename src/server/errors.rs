//! Tool server errors
//!
//! Maps the component taxonomy to HTTP statuses: bad request input is 400,
//! remote StatBank failures are 502, everything else inside the pipeline
//! is 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::client::ClientError;
use crate::feed::FeedError;
use crate::reader::ReadError;

/// Result type for tool operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Tool server errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid request parameter
    #[error("Invalid request parameter: {0}")]
    InvalidParam(String),

    /// Talking to the remote service failed
    #[error("{0}")]
    Client(#[from] ClientError),

    /// The end-to-end table read failed
    #[error("{0}")]
    Read(#[from] ReadError),

    /// The publications feed could not be parsed
    #[error("{0}")]
    Feed(#[from] FeedError),
}

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidParam(_) => StatusCode::BAD_REQUEST,

            // Remote service failures and upstream payload anomalies
            ServerError::Client(_) => StatusCode::BAD_GATEWAY,
            ServerError::Read(ReadError::Remote(_)) => StatusCode::BAD_GATEWAY,
            ServerError::Read(ReadError::Metadata(_)) => StatusCode::BAD_GATEWAY,
            ServerError::Read(ReadError::Dataset(_)) => StatusCode::BAD_GATEWAY,
            ServerError::Feed(_) => StatusCode::BAD_GATEWAY,

            // An unsplittable query is a local planning fault
            ServerError::Read(ReadError::Partition(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ServerError> for ErrorResponse {
    fn from(err: ServerError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
