//! The StatBank HTTP client

use std::time::Duration;

use serde_json::Value;

use crate::partition::Query;

use super::config::ClientConfig;
use super::errors::{ClientError, ClientResult};
use super::request::DataRequest;

/// Client for the StatBank v0 API
#[derive(Debug, Clone)]
pub struct StatbankClient {
    config: ClientConfig,
}

impl StatbankClient {
    /// Creates a client with the given configuration
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Returns the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a transport handle scoped to one logical call
    fn transport(&self) -> ClientResult<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }

    /// Searches tables by keyword and returns the decoded JSON response.
    ///
    /// Keywords are joined with encoded spaces, matching the query syntax of
    /// the search endpoint.
    pub async fn search(&self, keywords: &[String]) -> ClientResult<Value> {
        let query = keywords.join("%20");
        let url = self.config.search_url(&query);

        let response = self.transport()?.get(&url).send().await?;
        let response = require_success(response).await?;
        Ok(response.json().await?)
    }

    /// Fetches the raw table description document
    pub async fn table_metadata(&self, table_id: &str) -> ClientResult<Value> {
        let url = self.config.table_url(table_id);

        let response = self.transport()?.get(&url).send().await?;
        let response = require_success(response).await?;
        Ok(response.json().await?)
    }

    /// Executes one partitioned query and returns the raw json-stat2 body
    pub async fn table_data(&self, table_id: &str, query: &Query) -> ClientResult<String> {
        let url = self.config.table_url(table_id);
        let body = DataRequest::from_query(query);

        let response = self.transport()?.post(&url).json(&body).send().await?;
        let response = require_success(response).await?;
        Ok(response.text().await?)
    }

    /// Fetches the publications feed XML
    pub async fn publications_feed(&self) -> ClientResult<String> {
        let response = self.transport()?.get(&self.config.feed_url).send().await?;
        let response = require_success(response).await?;
        Ok(response.text().await?)
    }
}

impl Default for StatbankClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

/// Turns a non-success response into a `RemoteStatus` error carrying the body
async fn require_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::RemoteStatus {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_config_urls() {
        let client = StatbankClient::default();
        assert_eq!(
            client.config().table_url("13198"),
            "https://data.ssb.no/api/v0/no/table/13198"
        );
    }
}
