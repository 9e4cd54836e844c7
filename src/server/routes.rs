//! Router construction and request handlers

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;

use super::config::ServerConfig;
use super::errors::ServerError;
use super::handler::ToolHandler;
use super::request::{PublicationsRequest, SearchRequest, TableRequest};
use super::response::{HealthResponse, PublicationsResponse, TableResponse};

/// The HTTP tool server
pub struct ToolServer<H: ToolHandler> {
    handler: Arc<H>,
    config: ServerConfig,
}

impl<H: ToolHandler + 'static> ToolServer<H> {
    /// Creates a server over the given handler
    pub fn new(handler: H, config: ServerConfig) -> Self {
        Self {
            handler: Arc::new(handler),
            config,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Build the axum router
    pub fn router(&self) -> Router {
        let cors = if self.config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/tools/search", post(search_handler::<H>))
            .route("/tools/table-metadata", post(metadata_handler::<H>))
            .route("/tools/read-table", post(read_table_handler::<H>))
            .route(
                "/tools/latest-publications",
                post(publications_handler::<H>),
            )
            .with_state(self.handler.clone())
            .layer(cors)
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let router = self.router();
        let listener = TcpListener::bind(addr).await?;

        Logger::info("SERVER_STARTED", &[("addr", &addr.to_string())]);
        axum::serve(listener, router).await
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn search_handler<H: ToolHandler>(
    State(handler): State<Arc<H>>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<Value>, ServerError> {
    let result = handler.search(&body.keywords).await?;
    Ok(Json(result))
}

async fn metadata_handler<H: ToolHandler>(
    State(handler): State<Arc<H>>,
    Json(body): Json<TableRequest>,
) -> Result<Json<Value>, ServerError> {
    let result = handler.table_metadata(&body.table_id).await?;
    Ok(Json(result))
}

async fn read_table_handler<H: ToolHandler>(
    State(handler): State<Arc<H>>,
    Json(body): Json<TableRequest>,
) -> Result<Json<TableResponse>, ServerError> {
    let dataset = handler.read_table(&body.table_id).await?;
    Ok(Json(TableResponse::from_dataset(dataset)))
}

async fn publications_handler<H: ToolHandler>(
    State(handler): State<Arc<H>>,
    Json(body): Json<PublicationsRequest>,
) -> Result<Json<PublicationsResponse>, ServerError> {
    let date = match body.date {
        Some(raw) => Some(parse_date(&raw)?),
        None => None,
    };

    let publications = handler.latest_publications(date).await?;
    Ok(Json(PublicationsResponse::new(publications)))
}

/// Parses an ISO date parameter
fn parse_date(raw: &str) -> Result<NaiveDate, ServerError> {
    raw.parse::<NaiveDate>()
        .map_err(|_| ServerError::InvalidParam(format!("Not an ISO date: '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::dataset::Dataset;
    use crate::feed::Publication;
    use crate::server::errors::ServerResult;

    struct NullHandler;

    #[async_trait]
    impl ToolHandler for NullHandler {
        async fn search(&self, _keywords: &[String]) -> ServerResult<Value> {
            Ok(json!([]))
        }

        async fn table_metadata(&self, _table_id: &str) -> ServerResult<Value> {
            Ok(json!({}))
        }

        async fn read_table(&self, _table_id: &str) -> ServerResult<Dataset> {
            Ok(Dataset::empty())
        }

        async fn latest_publications(
            &self,
            _date: Option<NaiveDate>,
        ) -> ServerResult<Vec<Publication>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_router_builds() {
        let server = ToolServer::new(NullHandler, ServerConfig::default());
        let _router = server.router();
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2025-05-02").is_ok());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_socket_addr_from_config() {
        let server = ToolServer::new(NullHandler, ServerConfig::with_port(9000));
        assert_eq!(server.socket_addr(), "127.0.0.1:9000");
    }
}
