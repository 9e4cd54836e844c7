//! End-to-end table reads

use futures_util::stream::{self, StreamExt, TryStreamExt};

use crate::client::{ClientConfig, StatbankClient};
use crate::dataset::{assemble, decode, Dataset};
use crate::metadata::TableMetadata;
use crate::observability::Logger;
use crate::partition::{partition, Query};

use super::errors::ReadError;
use super::source::TableSource;

/// Reads whole tables, partitioning the selection as needed
pub struct TableReader<S: TableSource> {
    source: S,
    max_cells: u64,
    max_in_flight: usize,
}

impl TableReader<StatbankClient> {
    /// Creates a reader backed by the HTTP client for the given configuration
    pub fn from_config(config: ClientConfig) -> Self {
        let max_cells = config.max_cells;
        let max_in_flight = config.max_in_flight;
        Self::new(StatbankClient::new(config), max_cells, max_in_flight)
    }
}

impl<S: TableSource> TableReader<S> {
    /// Creates a reader over the given source.
    ///
    /// `max_in_flight` bounds concurrent sub-query fetches; 1 means strictly
    /// sequential. Assembly order is partition order either way.
    pub fn new(source: S, max_cells: u64, max_in_flight: usize) -> Self {
        Self {
            source,
            max_cells,
            max_in_flight: max_in_flight.max(1),
        }
    }

    /// Reads a whole table into one dataset.
    ///
    /// Metadata is fetched and reduced to dimensions, the selection is
    /// partitioned under the cell cap, every sub-query is executed, and the
    /// decoded results are concatenated in partition order. Any failure
    /// aborts the read.
    pub async fn read_table(&self, table_id: &str) -> Result<Dataset, ReadError> {
        let raw = self.source.table_metadata(table_id).await?;
        let metadata = TableMetadata::from_value(raw)?;
        let dimensions = metadata.dimensions()?;

        let full = Query::new(dimensions);
        let cardinality = full.cardinality();
        let queries = partition(full, self.max_cells)?;

        Logger::info(
            "READ_TABLE_PLANNED",
            &[
                ("table", table_id),
                ("cells", &cardinality.to_string()),
                ("subqueries", &queries.len().to_string()),
            ],
        );

        // The buffered stream yields in submission order regardless of
        // completion order, and the first error aborts the remaining fetches.
        let fetches: Vec<_> = queries
            .iter()
            .map(|query| self.source.table_data(table_id, query))
            .collect();
        let bodies: Vec<String> = stream::iter(fetches)
            .buffered(self.max_in_flight)
            .try_collect()
            .await?;

        let mut subtables = Vec::with_capacity(bodies.len());
        for body in &bodies {
            subtables.push(decode(body)?);
        }

        let dataset = assemble(subtables)?;

        Logger::info(
            "READ_TABLE_ASSEMBLED",
            &[("table", table_id), ("rows", &dataset.len().to_string())],
        );

        Ok(dataset)
    }
}
