//! The tabular dataset type

use serde::Serialize;
use serde_json::Value;

/// An ordered tabular dataset: named columns plus rows of cells.
///
/// Category cells are strings; the measurement cell is a number or null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Column names, dimension columns first, measurement column last
    pub columns: Vec<String>,
    /// Rows in order; each row has one cell per column
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Creates a dataset from columns and rows
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Creates a dataset with no columns and no rows
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &Vec<Value>> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }

    #[test]
    fn test_dataset_serializes_rows_in_order() {
        let dataset = Dataset::new(
            vec!["region".to_string(), "value".to_string()],
            vec![
                vec![json!("Halden"), json!(31444.0)],
                vec![json!("Moss"), json!(50290.0)],
            ],
        );

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["columns"][0], "region");
        assert_eq!(value["rows"][0][0], "Halden");
        assert_eq!(value["rows"][1][1], 50290.0);
    }
}
