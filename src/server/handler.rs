//! Tool handler seam and its StatBank implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::client::{ClientConfig, StatbankClient};
use crate::dataset::Dataset;
use crate::feed::{latest_publications, Publication};
use crate::reader::TableReader;

use super::errors::{ServerError, ServerResult};

/// The operations the tool server exposes.
///
/// The production implementation talks to StatBank; tests drive the router
/// with a fake.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Searches tables by keyword, returning the raw search response
    async fn search(&self, keywords: &[String]) -> ServerResult<Value>;

    /// Fetches the raw table description document
    async fn table_metadata(&self, table_id: &str) -> ServerResult<Value>;

    /// Reads a whole table, partitioning the selection as needed
    async fn read_table(&self, table_id: &str) -> ServerResult<Dataset>;

    /// Lists the latest publications, optionally filtered by date
    async fn latest_publications(&self, date: Option<NaiveDate>) -> ServerResult<Vec<Publication>>;
}

/// Tool handler backed by the StatBank API
pub struct StatbankToolHandler {
    client: StatbankClient,
}

impl StatbankToolHandler {
    /// Creates a handler for the given client configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: StatbankClient::new(config),
        }
    }
}

#[async_trait]
impl ToolHandler for StatbankToolHandler {
    async fn search(&self, keywords: &[String]) -> ServerResult<Value> {
        if keywords.is_empty() {
            return Err(ServerError::InvalidParam(
                "keywords must not be empty".to_string(),
            ));
        }
        Ok(self.client.search(keywords).await?)
    }

    async fn table_metadata(&self, table_id: &str) -> ServerResult<Value> {
        Ok(self.client.table_metadata(table_id).await?)
    }

    async fn read_table(&self, table_id: &str) -> ServerResult<Dataset> {
        let config = self.client.config();
        let reader = TableReader::new(
            self.client.clone(),
            config.max_cells,
            config.max_in_flight,
        );
        Ok(reader.read_table(table_id).await?)
    }

    async fn latest_publications(&self, date: Option<NaiveDate>) -> ServerResult<Vec<Publication>> {
        let xml = self.client.publications_feed().await?;
        Ok(latest_publications(&xml, date)?)
    }
}
