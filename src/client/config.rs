//! Client configuration
//!
//! Endpoint location, language, cell cap, and fetch behavior. All fields
//! have defaults matching the public StatBank service.

use serde::{Deserialize, Serialize};

use crate::partition::DEFAULT_CELL_CAP;

/// Configuration for the StatBank client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL (default: "https://data.ssb.no/api/v0")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API language segment (default: "no")
    #[serde(default = "default_language")]
    pub language: String,

    /// Maximum data cells per request (default: 300000)
    #[serde(default = "default_max_cells")]
    pub max_cells: u64,

    /// Maximum concurrent sub-query fetches (default: 1, sequential)
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,

    /// Request timeout in seconds (default: 60)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Publications feed URL (default: "https://www.ssb.no/rss/statbank/")
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
}

fn default_base_url() -> String {
    "https://data.ssb.no/api/v0".to_string()
}

fn default_language() -> String {
    "no".to_string()
}

fn default_max_cells() -> u64 {
    DEFAULT_CELL_CAP
}

fn default_max_in_flight() -> usize {
    1
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_feed_url() -> String {
    "https://www.ssb.no/rss/statbank/".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            max_cells: default_max_cells(),
            max_in_flight: default_max_in_flight(),
            timeout_secs: default_timeout_secs(),
            feed_url: default_feed_url(),
        }
    }
}

impl ClientConfig {
    /// URL of a table endpoint (metadata GET, data POST)
    pub fn table_url(&self, table_id: &str) -> String {
        format!(
            "{}/{}/table/{}",
            self.base_url.trim_end_matches('/'),
            self.language,
            table_id
        )
    }

    /// URL of the table search endpoint for the given raw query string
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/{}/table/?query={}",
            self.base_url.trim_end_matches('/'),
            self.language,
            query
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://data.ssb.no/api/v0");
        assert_eq!(config.language, "no");
        assert_eq!(config.max_cells, 300_000);
        assert_eq!(config.max_in_flight, 1);
    }

    #[test]
    fn test_table_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.table_url("09842"),
            "https://data.ssb.no/api/v0/no/table/09842"
        );
    }

    #[test]
    fn test_table_url_tolerates_trailing_slash() {
        let config = ClientConfig {
            base_url: "https://data.ssb.no/api/v0/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.table_url("09842"),
            "https://data.ssb.no/api/v0/no/table/09842"
        );
    }

    #[test]
    fn test_search_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.search_url("kpi%20sysselsetting"),
            "https://data.ssb.no/api/v0/no/table/?query=kpi%20sysselsetting"
        );
    }

    #[test]
    fn test_deserialize_with_partial_fields() {
        let config: ClientConfig = serde_json::from_str(r#"{"language": "en"}"#).unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.max_cells, 300_000);
    }
}
