//! The remote source seam

use async_trait::async_trait;
use serde_json::Value;

use crate::client::{ClientResult, StatbankClient};
use crate::partition::Query;

/// The two remote operations a table read needs.
///
/// The production implementation is `StatbankClient`; tests provide fakes.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetches the raw table description document
    async fn table_metadata(&self, table_id: &str) -> ClientResult<Value>;

    /// Executes one partitioned query, returning the raw json-stat2 body
    async fn table_data(&self, table_id: &str, query: &Query) -> ClientResult<String>;
}

#[async_trait]
impl TableSource for StatbankClient {
    async fn table_metadata(&self, table_id: &str) -> ClientResult<Value> {
        StatbankClient::table_metadata(self, table_id).await
    }

    async fn table_data(&self, table_id: &str, query: &Query) -> ClientResult<String> {
        StatbankClient::table_data(self, table_id, query).await
    }
}
