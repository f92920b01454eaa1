//! The cleaned, in-memory phone dataset.

mod record;

pub use record::Record;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::input::{Parser, RawTable, SourceMetadata};
use crate::schema::Column;

/// Ordered, read-only collection of normalized records.
///
/// Built once from a file; mutation operations act on files and never on a
/// loaded dataset, so a reload is needed to observe them.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    source: Option<SourceMetadata>,
}

impl Dataset {
    /// Load and normalize a CSV file with the default parser.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(&Parser::new(), path)
    }

    /// Load and normalize a file with a configured parser.
    pub fn load_with(parser: &Parser, path: impl AsRef<Path>) -> Result<Self> {
        let (table, source) = parser.parse_file(path)?;
        let mut dataset = Self::from_table(&table);
        info!(file = %source.file, records = dataset.len(), "loaded dataset");
        dataset.source = Some(source);
        Ok(dataset)
    }

    /// Normalize every row of a raw table. Columns are located by header name.
    pub fn from_table(table: &RawTable) -> Self {
        let positions: Vec<Option<usize>> = Column::ALL
            .iter()
            .map(|column| table.column_index(column.name()))
            .collect();

        for (column, position) in Column::ALL.iter().zip(&positions) {
            if position.is_none() {
                warn!(column = %column, "column missing from header; values will be absent");
            }
        }
        for header in &table.headers {
            if Column::from_name(header).is_none() {
                debug!(header = %header, "ignoring unknown column");
            }
        }

        let records = (0..table.row_count())
            .map(|row| {
                Record::from_raw(|column| {
                    positions[column.position()].and_then(|col| table.get(row, col))
                })
            })
            .collect();

        Self {
            records,
            source: None,
        }
    }

    /// Wrap already-normalized records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    /// All records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Get a record by row index (0 = first data row).
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Metadata of the file this dataset was loaded from, if any.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
