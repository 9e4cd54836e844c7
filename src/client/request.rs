//! Wire types for the table data endpoint
//!
//! The data endpoint takes a POST body restricting each variable to an
//! explicit value selection and naming the response format:
//!
//! ```json
//! {
//!   "query": [
//!     {"code": "Region", "selection": {"filter": "item", "values": ["3001"]}}
//!   ],
//!   "response": {"format": "json-stat2"}
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::partition::Query;

/// Selection filter kind for explicit value lists
const ITEM_FILTER: &str = "item";

/// Response format requested from the data endpoint
const JSON_STAT2: &str = "json-stat2";

/// POST body for the table data endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRequest {
    /// Per-variable selections
    pub query: Vec<QueryVariable>,
    /// Requested response format
    pub response: ResponseFormat,
}

/// One variable selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryVariable {
    /// Variable code
    pub code: String,
    /// Value selection
    pub selection: Selection,
}

/// Explicit value selection for one variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// Filter kind, always "item" for explicit value lists
    pub filter: String,
    /// Selected value keys
    pub values: Vec<String>,
}

/// Response format specifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Format name
    pub format: String,
}

impl DataRequest {
    /// Builds the request body for one partitioned query
    pub fn from_query(query: &Query) -> Self {
        Self {
            query: query
                .dimensions
                .iter()
                .map(|dim| QueryVariable {
                    code: dim.code.clone(),
                    selection: Selection {
                        filter: ITEM_FILTER.to_string(),
                        values: dim.values.clone(),
                    },
                })
                .collect(),
            response: ResponseFormat {
                format: JSON_STAT2.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Dimension;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let query = Query::new(vec![
            Dimension::new("Region", vec!["3001".to_string(), "3002".to_string()]),
            Dimension::new("Tid", vec!["2024".to_string()]),
        ]);

        let body = serde_json::to_value(DataRequest::from_query(&query)).unwrap();
        assert_eq!(
            body,
            json!({
                "query": [
                    {"code": "Region", "selection": {"filter": "item", "values": ["3001", "3002"]}},
                    {"code": "Tid", "selection": {"filter": "item", "values": ["2024"]}}
                ],
                "response": {"format": "json-stat2"}
            })
        );
    }

    #[test]
    fn test_request_preserves_dimension_order() {
        let query = Query::new(vec![
            Dimension::new("b", vec!["1".to_string()]),
            Dimension::new("a", vec!["2".to_string()]),
        ]);

        let request = DataRequest::from_query(&query);
        assert_eq!(request.query[0].code, "b");
        assert_eq!(request.query[1].code, "a");
    }
}
