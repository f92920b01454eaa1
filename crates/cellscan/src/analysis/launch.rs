//! Launch-year queries.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Years counted by [`peak_launch_year`]: four digits starting with "20".
const MODERN_ERA: RangeInclusive<i32> = 2000..=2099;

/// A phone announced in one year and released in another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMismatch {
    pub oem: Option<String>,
    pub model: Option<String>,
    pub announced_year: i32,
    pub release_year: i32,
}

/// Number of launches in a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTally {
    pub year: i32,
    pub launches: usize,
}

/// Phones whose announced year differs from the year found in their launch status.
///
/// A missing announced year counts as 0 and is never reported. Results come
/// lazily, in dataset order.
pub fn announced_vs_released_mismatches(
    dataset: &Dataset,
) -> impl Iterator<Item = YearMismatch> + '_ {
    dataset.iter().filter_map(|record| {
        let announced_year = record.launch_announced.unwrap_or(0);
        let release_year = record.release_year()?;
        (announced_year > 0 && announced_year != release_year).then(|| YearMismatch {
            oem: record.oem.clone(),
            model: record.model.clone(),
            announced_year,
            release_year,
        })
    })
}

/// Announcements per year from 2000 on, ascending by year.
pub fn launches_per_year(dataset: &Dataset) -> BTreeMap<i32, usize> {
    let mut tally = BTreeMap::new();
    for year in dataset.iter().filter_map(|r| r.launch_announced) {
        if MODERN_ERA.contains(&year) {
            *tally.entry(year).or_insert(0) += 1;
        }
    }
    tally
}

/// Year with the most announcements after 1999; equal counts go to the earliest year.
pub fn peak_launch_year(dataset: &Dataset) -> Option<YearTally> {
    let mut peak: Option<YearTally> = None;
    for (year, launches) in launches_per_year(dataset) {
        if peak.is_none_or(|p| launches > p.launches) {
            peak = Some(YearTally { year, launches });
        }
    }
    peak
}
