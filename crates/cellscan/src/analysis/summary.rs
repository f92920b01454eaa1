//! Per-column fill statistics.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::schema::Column;

/// Present/absent counts for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: Column,
    pub present: usize,
    pub absent: usize,
}

impl ColumnSummary {
    /// Get the absent percentage.
    pub fn absent_percentage(&self) -> f64 {
        let total = self.present + self.absent;
        if total == 0 {
            0.0
        } else {
            (self.absent as f64 / total as f64) * 100.0
        }
    }
}

/// How much usable data survived normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    /// One entry per column, in file order.
    pub columns: Vec<ColumnSummary>,
}

pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let columns = Column::ALL
        .iter()
        .map(|&column| {
            let present = dataset.iter().filter(|r| r.is_present(column)).count();
            ColumnSummary {
                column,
                present,
                absent: dataset.len() - present,
            }
        })
        .collect();

    DatasetSummary {
        records: dataset.len(),
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    #[test]
    fn test_summarize_counts_presence() {
        let dataset = Dataset::from_records(vec![
            Record::from_row(&["Samsung", "-", "2019", "", "", "150 g"]),
            Record::from_row(&["", "Pixel", "", "", "", "abc"]),
        ]);
        let summary = summarize(&dataset);

        assert_eq!(summary.records, 2);
        assert_eq!(summary.columns.len(), 12);
        let oem = &summary.columns[Column::Oem.position()];
        assert_eq!((oem.present, oem.absent), (1, 1));
        let weight = &summary.columns[Column::BodyWeight.position()];
        assert_eq!((weight.present, weight.absent), (1, 1));
        let os = &summary.columns[Column::PlatformOs.position()];
        assert_eq!(os.absent_percentage(), 100.0);
    }
}
