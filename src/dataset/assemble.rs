//! Concatenation of sub-datasets in partition order

use super::errors::{DatasetError, DatasetResult};
use super::table::Dataset;

/// Concatenates decoded sub-datasets into one dataset.
///
/// Sub-datasets are appended in input order; within each one, row order is
/// preserved verbatim. The first non-empty sub-dataset establishes the
/// column schema; any later sub-dataset with different columns is a
/// data-integrity error. Sub-datasets with no rows contribute nothing and
/// are skipped.
pub fn assemble(subtables: Vec<Dataset>) -> DatasetResult<Dataset> {
    let mut merged = Dataset::empty();

    for (position, sub) in subtables.into_iter().enumerate() {
        if sub.is_empty() {
            continue;
        }

        if merged.columns.is_empty() {
            merged = sub;
            continue;
        }

        if sub.columns != merged.columns {
            return Err(DatasetError::schema_mismatch(
                position,
                &merged.columns,
                &sub.columns,
            ));
        }

        merged.rows.extend(sub.rows);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sub(prefix: &str, rows: usize) -> Dataset {
        Dataset::new(
            vec!["region".to_string(), "value".to_string()],
            (0..rows)
                .map(|r| vec![json!(format!("{}-{}", prefix, r)), json!(r as f64)])
                .collect(),
        )
    }

    #[test]
    fn test_rows_concatenate_in_input_order() {
        let merged = assemble(vec![sub("s1", 2), sub("s2", 1), sub("s3", 3)]).unwrap();

        assert_eq!(merged.len(), 6);
        let first_cells: Vec<String> = merged
            .rows
            .iter()
            .map(|row| row[0].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            first_cells,
            vec!["s1-0", "s1-1", "s2-0", "s3-0", "s3-1", "s3-2"]
        );
    }

    #[test]
    fn test_first_subtable_establishes_schema() {
        let merged = assemble(vec![sub("a", 1), sub("b", 1)]).unwrap();
        assert_eq!(merged.columns, vec!["region", "value"]);
    }

    #[test]
    fn test_schema_mismatch_is_fatal() {
        let other = Dataset::new(
            vec!["year".to_string(), "value".to_string()],
            vec![vec![json!("2024"), json!(1.0)]],
        );

        let err = assemble(vec![sub("a", 1), other]).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_DATASET_SCHEMA_MISMATCH");
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn test_empty_subtables_are_skipped() {
        // An empty sub-dataset neither contributes rows nor disturbs order,
        // even if its columns differ
        let empty = Dataset::new(vec!["other".to_string()], vec![]);

        let merged = assemble(vec![sub("a", 1), empty, sub("b", 2)]).unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.rows[1][0], json!("b-0"));
    }

    #[test]
    fn test_no_subtables_yields_empty_dataset() {
        let merged = assemble(vec![]).unwrap();
        assert!(merged.is_empty());
        assert!(merged.columns.is_empty());
    }
}
