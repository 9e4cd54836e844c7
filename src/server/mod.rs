//! HTTP tool server
//!
//! Axum-based server exposing each StatBank operation as one POST endpoint
//! returning JSON, plus a health check. Handlers go through the
//! `ToolHandler` trait so the router can be tested with a fake.

mod config;
mod errors;
mod handler;
mod request;
mod response;
mod routes;

pub use config::ServerConfig;
pub use errors::{ErrorResponse, ServerError, ServerResult};
pub use handler::{StatbankToolHandler, ToolHandler};
pub use request::{PublicationsRequest, SearchRequest, TableRequest};
pub use response::{HealthResponse, PublicationsResponse, TableResponse};
pub use routes::ToolServer;
