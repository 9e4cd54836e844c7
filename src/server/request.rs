//! Tool request bodies

use serde::Deserialize;

/// Body of the search tool
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Keywords to search tables for
    pub keywords: Vec<String>,
}

/// Body of the table metadata and read-table tools
#[derive(Debug, Clone, Deserialize)]
pub struct TableRequest {
    /// StatBank table identifier
    pub table_id: String,
}

/// Body of the latest-publications tool
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicationsRequest {
    /// Optional ISO date to filter publications by
    #[serde(default)]
    pub date: Option<String>,
}
