//! json-stat2 decoding
//!
//! Tabulates a json-stat2 dataset payload into rows. Cells are enumerated in
//! row-major order over the dimension sizes (the last dimension varies
//! fastest), which is the order the `value` array is laid out in. Columns
//! are the dimension labels (id as fallback) plus a final "value" column;
//! cell values are category labels (code as fallback).

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::errors::{DatasetError, DatasetResult};
use super::table::Dataset;

/// Name of the measurement column
const VALUE_COLUMN: &str = "value";

/// The subset of a json-stat2 dataset payload needed to tabulate rows
#[derive(Debug, Clone, Deserialize)]
pub struct JsonStat {
    /// Dimension ids in order
    pub id: Vec<String>,
    /// Category count per dimension, parallel to `id`
    pub size: Vec<usize>,
    /// Per-dimension category descriptions
    pub dimension: HashMap<String, JsonStatDimension>,
    /// Cell values in row-major order
    pub value: Vec<Option<f64>>,
}

/// One dimension of a json-stat2 dataset
#[derive(Debug, Clone, Deserialize)]
pub struct JsonStatDimension {
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Category index and labels
    pub category: JsonStatCategory,
}

/// Category description of one dimension
#[derive(Debug, Clone, Deserialize)]
pub struct JsonStatCategory {
    /// Category positions, either a code-to-position map or an ordered list
    #[serde(default)]
    pub index: Option<CategoryIndex>,
    /// Category display labels keyed by code
    #[serde(default)]
    pub label: Option<HashMap<String, String>>,
}

/// The two encodings json-stat2 allows for a category index
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryIndex {
    /// Codes in position order
    Ordered(Vec<String>),
    /// Code-to-position map
    Positions(HashMap<String, usize>),
}

/// Decodes a raw json-stat2 payload into a dataset
pub fn decode(raw: &str) -> DatasetResult<Dataset> {
    let payload: JsonStat = serde_json::from_str(raw)
        .map_err(|e| DatasetError::decode(format!("Not a json-stat2 dataset: {}", e)))?;
    tabulate(&payload)
}

/// Tabulates a decoded payload into rows
fn tabulate(payload: &JsonStat) -> DatasetResult<Dataset> {
    if payload.id.len() != payload.size.len() {
        return Err(DatasetError::shape(format!(
            "{} dimension ids but {} sizes",
            payload.id.len(),
            payload.size.len()
        )));
    }

    let expected: usize = payload.size.iter().product();
    if payload.value.len() != expected {
        return Err(DatasetError::shape(format!(
            "{} values for {} cells",
            payload.value.len(),
            expected
        )));
    }

    // Resolve per-dimension column names and ordered cell labels up front
    let mut columns = Vec::with_capacity(payload.id.len() + 1);
    let mut cell_labels: Vec<Vec<String>> = Vec::with_capacity(payload.id.len());

    for (dim_index, id) in payload.id.iter().enumerate() {
        let dimension = payload.dimension.get(id).ok_or_else(|| {
            DatasetError::shape(format!("Dimension '{}' missing from payload", id))
        })?;

        columns.push(dimension.label.clone().unwrap_or_else(|| id.clone()));
        cell_labels.push(ordered_labels(id, dimension, payload.size[dim_index])?);
    }
    columns.push(VALUE_COLUMN.to_string());

    // Enumerate cells; the last dimension varies fastest
    let mut rows = Vec::with_capacity(expected);
    for (cell, measurement) in payload.value.iter().enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        let mut remainder = cell;
        for dim_index in (0..payload.size.len()).rev() {
            let coordinate = remainder % payload.size[dim_index];
            remainder /= payload.size[dim_index];
            row.push(Value::String(cell_labels[dim_index][coordinate].clone()));
        }
        row.reverse();
        row.push(match measurement {
            Some(number) => Value::from(*number),
            None => Value::Null,
        });
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

/// Category labels of one dimension in position order
fn ordered_labels(
    id: &str,
    dimension: &JsonStatDimension,
    size: usize,
) -> DatasetResult<Vec<String>> {
    let codes = ordered_codes(id, dimension, size)?;
    let labels = dimension.category.label.as_ref();

    Ok(codes
        .into_iter()
        .map(|code| {
            labels
                .and_then(|map| map.get(&code).cloned())
                .unwrap_or(code)
        })
        .collect())
}

/// Category codes of one dimension in position order
fn ordered_codes(
    id: &str,
    dimension: &JsonStatDimension,
    size: usize,
) -> DatasetResult<Vec<String>> {
    let codes = match &dimension.category.index {
        Some(CategoryIndex::Ordered(list)) => list.clone(),
        Some(CategoryIndex::Positions(map)) => {
            let mut pairs: Vec<(&String, &usize)> = map.iter().collect();
            pairs.sort_by_key(|(_, position)| **position);
            pairs.into_iter().map(|(code, _)| code.clone()).collect()
        }
        // A dimension with a single category may omit the index entirely
        None => match &dimension.category.label {
            Some(labels) if labels.len() == 1 => labels.keys().cloned().collect(),
            _ => {
                return Err(DatasetError::shape(format!(
                    "Dimension '{}' has no category index",
                    id
                )))
            }
        },
    };

    if codes.len() != size {
        return Err(DatasetError::shape(format!(
            "Dimension '{}' has {} categories but size {}",
            id,
            codes.len(),
            size
        )));
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> String {
        json!({
            "class": "dataset",
            "label": "Population, by region and year",
            "id": ["Region", "Tid"],
            "size": [2, 2],
            "dimension": {
                "Region": {
                    "label": "region",
                    "category": {
                        "index": {"3001": 0, "3002": 1},
                        "label": {"3001": "Halden", "3002": "Moss"}
                    }
                },
                "Tid": {
                    "label": "year",
                    "category": {
                        "index": ["2023", "2024"],
                        "label": {"2023": "2023", "2024": "2024"}
                    }
                }
            },
            "value": [31037.0, 31444.0, 49273.0, 50290.0]
        })
        .to_string()
    }

    #[test]
    fn test_decode_columns() {
        let dataset = decode(&payload()).unwrap();
        assert_eq!(dataset.columns, vec!["region", "year", "value"]);
    }

    #[test]
    fn test_decode_rows_in_row_major_order() {
        let dataset = decode(&payload()).unwrap();
        assert_eq!(dataset.len(), 4);
        // Last dimension (year) varies fastest
        assert_eq!(
            dataset.rows[0],
            vec![json!("Halden"), json!("2023"), json!(31037.0)]
        );
        assert_eq!(
            dataset.rows[1],
            vec![json!("Halden"), json!("2024"), json!(31444.0)]
        );
        assert_eq!(
            dataset.rows[2],
            vec![json!("Moss"), json!("2023"), json!(49273.0)]
        );
    }

    #[test]
    fn test_decode_null_measurement() {
        let raw = json!({
            "id": ["Tid"],
            "size": [2],
            "dimension": {
                "Tid": {"category": {"index": ["2023", "2024"]}}
            },
            "value": [null, 7.5]
        })
        .to_string();

        let dataset = decode(&raw).unwrap();
        assert_eq!(dataset.rows[0][1], Value::Null);
        assert_eq!(dataset.rows[1][1], json!(7.5));
        // No dimension label: the id is the column name, codes are the cells
        assert_eq!(dataset.columns, vec!["Tid", "value"]);
        assert_eq!(dataset.rows[0][0], json!("2023"));
    }

    #[test]
    fn test_decode_single_category_without_index() {
        let raw = json!({
            "id": ["ContentsCode", "Tid"],
            "size": [1, 2],
            "dimension": {
                "ContentsCode": {
                    "label": "contents",
                    "category": {"label": {"Folketallet": "Population"}}
                },
                "Tid": {"category": {"index": ["2023", "2024"]}}
            },
            "value": [1.0, 2.0]
        })
        .to_string();

        let dataset = decode(&raw).unwrap();
        assert_eq!(dataset.rows[0][0], json!("Population"));
    }

    #[test]
    fn test_decode_rejects_value_count_mismatch() {
        let raw = json!({
            "id": ["Tid"],
            "size": [3],
            "dimension": {"Tid": {"category": {"index": ["a", "b", "c"]}}},
            "value": [1.0]
        })
        .to_string();

        let err = decode(&raw).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_DATASET_SHAPE");
    }

    #[test]
    fn test_decode_rejects_missing_dimension_entry() {
        let raw = json!({
            "id": ["Tid"],
            "size": [1],
            "dimension": {},
            "value": [1.0]
        })
        .to_string();

        let err = decode(&raw).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_DATASET_SHAPE");
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode("<html>not json</html>").unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_DATASET_DECODE");
    }
}
