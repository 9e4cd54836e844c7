//! Tool response bodies

use serde::Serialize;

use crate::dataset::Dataset;
use crate::feed::Publication;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Read-table response: the assembled dataset plus its row count
#[derive(Debug, Clone, Serialize)]
pub struct TableResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
    pub row_count: usize,
}

impl TableResponse {
    pub fn from_dataset(dataset: Dataset) -> Self {
        let row_count = dataset.len();
        Self {
            columns: dataset.columns,
            rows: dataset.rows,
            row_count,
        }
    }
}

/// Latest-publications response
#[derive(Debug, Clone, Serialize)]
pub struct PublicationsResponse {
    pub publications: Vec<Publication>,
    pub count: usize,
}

impl PublicationsResponse {
    pub fn new(publications: Vec<Publication>) -> Self {
        let count = publications.len();
        Self {
            publications,
            count,
        }
    }
}
