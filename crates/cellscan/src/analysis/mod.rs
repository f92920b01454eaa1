//! Read-only aggregate queries over a [`Dataset`](crate::dataset::Dataset).
//!
//! Every function here is pure: it neither mutates the dataset nor touches
//! the filesystem, so queries can run any number of times in any order.

mod launch;
mod sensors;
mod summary;
mod uniques;
mod weight;

pub use launch::{
    YearMismatch, YearTally, announced_vs_released_mismatches, launches_per_year,
    peak_launch_year,
};
pub use sensors::{count_single_sensor_phones, has_single_sensor, sensor_segments};
pub use summary::{ColumnSummary, DatasetSummary, summarize};
pub use uniques::{
    OemsAndModels, SensorsAndPlatforms, unique_oems_and_models, unique_sensors_and_platforms,
    unique_values,
};
pub use weight::{WeightLeader, average_weight_by_oem, highest_average_weight};
