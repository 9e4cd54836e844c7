//! Table description types and dimension construction
//!
//! The StatBank table description endpoint returns a document with a
//! `variables` array. Only `code` and `values` feed the query engine; the
//! remaining fields are carried so the raw document can be passed through
//! unchanged by the metadata tool.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{MetadataError, MetadataResult};

/// One categorical axis of a statistical table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Variable code, unique within a table
    pub code: String,
    /// Ordered permissible value keys
    pub values: Vec<String>,
}

impl Dimension {
    /// Creates a new dimension
    pub fn new(code: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    /// Number of permissible values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the dimension has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One variable descriptor as returned by the table description endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVariable {
    /// Variable code
    #[serde(default)]
    pub code: String,
    /// Display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Permissible value keys
    #[serde(default)]
    pub values: Vec<String>,
    /// Display texts for the values, parallel to `values`
    #[serde(
        rename = "valueTexts",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub value_texts: Option<Vec<String>>,
    /// Whether this is the time variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<bool>,
    /// Whether the variable can be eliminated from a selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elimination: Option<bool>,
}

/// Decoded table description document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Table title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Variable descriptors in source order
    pub variables: Vec<RawVariable>,
}

impl TableMetadata {
    /// Decodes a table description from its raw JSON document
    pub fn from_value(value: Value) -> MetadataResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| MetadataError::invalid(format!("Malformed table description: {}", e)))
    }

    /// Builds the dimension list, preserving source variable order
    pub fn dimensions(&self) -> MetadataResult<Vec<Dimension>> {
        build_dimensions(&self.variables)
    }
}

/// Builds dimensions from variable descriptors, preserving their order.
///
/// Rejects descriptors without a code, with an empty value list, or with a
/// code already used by an earlier descriptor.
pub fn build_dimensions(variables: &[RawVariable]) -> MetadataResult<Vec<Dimension>> {
    if variables.is_empty() {
        return Err(MetadataError::invalid("Table description has no variables"));
    }

    let mut seen = HashSet::with_capacity(variables.len());
    let mut dimensions = Vec::with_capacity(variables.len());

    for (position, variable) in variables.iter().enumerate() {
        if variable.code.is_empty() {
            return Err(MetadataError::missing_code(position));
        }
        if variable.values.is_empty() {
            return Err(MetadataError::empty_values(&variable.code));
        }
        if !seen.insert(variable.code.as_str()) {
            return Err(MetadataError::duplicate_code(&variable.code));
        }
        dimensions.push(Dimension::new(
            variable.code.clone(),
            variable.values.clone(),
        ));
    }

    Ok(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variable(code: &str, values: &[&str]) -> RawVariable {
        RawVariable {
            code: code.to_string(),
            text: None,
            values: values.iter().map(|v| v.to_string()).collect(),
            value_texts: None,
            time: None,
            elimination: None,
        }
    }

    #[test]
    fn test_dimensions_preserve_order() {
        let variables = vec![
            variable("Region", &["0", "1", "2"]),
            variable("Alder", &["15-24", "25-54"]),
            variable("Tid", &["2023", "2024"]),
        ];

        let dims = build_dimensions(&variables).unwrap();
        let codes: Vec<&str> = dims.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["Region", "Alder", "Tid"]);
        assert_eq!(dims[0].len(), 3);
    }

    #[test]
    fn test_missing_code_rejected() {
        let variables = vec![variable("Tid", &["2024"]), variable("", &["a"])];

        let err = build_dimensions(&variables).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_METADATA_MISSING_CODE");
    }

    #[test]
    fn test_empty_values_rejected() {
        let variables = vec![variable("Region", &[])];

        let err = build_dimensions(&variables).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_METADATA_EMPTY_VALUES");
        assert_eq!(err.variable(), Some("Region"));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let variables = vec![variable("Tid", &["2023"]), variable("Tid", &["2024"])];

        let err = build_dimensions(&variables).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_METADATA_INVALID");
    }

    #[test]
    fn test_no_variables_rejected() {
        let err = build_dimensions(&[]).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_METADATA_INVALID");
    }

    #[test]
    fn test_from_value_decodes_statbank_document() {
        let doc = json!({
            "title": "07459: Population, by region, year and contents",
            "variables": [
                {
                    "code": "Region",
                    "text": "region",
                    "values": ["3001", "3002"],
                    "valueTexts": ["Halden", "Moss"],
                    "elimination": true
                },
                {
                    "code": "Tid",
                    "text": "year",
                    "values": ["2024"],
                    "valueTexts": ["2024"],
                    "time": true
                }
            ]
        });

        let metadata = TableMetadata::from_value(doc).unwrap();
        assert_eq!(metadata.variables.len(), 2);
        assert_eq!(metadata.variables[0].value_texts.as_ref().unwrap().len(), 2);

        let dims = metadata.dimensions().unwrap();
        assert_eq!(dims[1].code, "Tid");
    }

    #[test]
    fn test_from_value_rejects_garbage() {
        let err = TableMetadata::from_value(json!({"variables": "nope"})).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_METADATA_INVALID");
    }
}
