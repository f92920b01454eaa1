//! Per-manufacturer weight averages.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// The manufacturer whose phones are heaviest on average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLeader {
    pub oem: String,
    pub average_grams: f64,
    /// Phones with a known weight that went into the average.
    pub phones: usize,
}

/// Mean weight and sample size per OEM, in first-encounter order.
///
/// Only records with both an OEM and a weight contribute.
pub fn average_weight_by_oem(dataset: &Dataset) -> IndexMap<&str, (f64, usize)> {
    let mut totals: IndexMap<&str, (f64, usize)> = IndexMap::new();
    for record in dataset {
        let (Some(oem), Some(weight)) = (record.oem.as_deref(), record.body_weight) else {
            continue;
        };
        let entry = totals.entry(oem).or_insert((0.0, 0));
        entry.0 += weight;
        entry.1 += 1;
    }

    for (sum, count) in totals.values_mut() {
        *sum /= *count as f64;
    }
    totals
}

/// OEM with the highest mean weight; equal means go to the smallest OEM name.
pub fn highest_average_weight(dataset: &Dataset) -> Option<WeightLeader> {
    average_weight_by_oem(dataset)
        .into_iter()
        .max_by(|(oem_a, (avg_a, _)), (oem_b, (avg_b, _))| {
            avg_a.total_cmp(avg_b).then_with(|| oem_b.cmp(oem_a))
        })
        .map(|(oem, (average_grams, phones))| WeightLeader {
            oem: oem.to_string(),
            average_grams,
            phones,
        })
}
