//! Read operation errors

use thiserror::Error;

use crate::client::ClientError;
use crate::dataset::DatasetError;
use crate::metadata::MetadataError;
use crate::partition::PartitionError;

/// Any failure of the end-to-end table read.
///
/// Every variant aborts the whole read; no partial dataset is ever
/// returned, since a partial dataset would silently misrepresent the table.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Malformed or incomplete table metadata
    #[error("{0}")]
    Metadata(#[from] MetadataError),

    /// The query cannot be reduced under the cell cap
    #[error("{0}")]
    Partition(#[from] PartitionError),

    /// A sub-query request failed
    #[error("{0}")]
    Remote(#[from] ClientError),

    /// A sub-query response could not be decoded or did not match the schema
    #[error("{0}")]
    Dataset(#[from] DatasetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_component_errors() {
        let err: ReadError = MetadataError::empty_values("Tid").into();
        assert!(matches!(err, ReadError::Metadata(_)));
        assert!(format!("{}", err).contains("STATBANK_METADATA_EMPTY_VALUES"));
    }
}
