//! Distinct-value extraction.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::schema::Column;

/// Distinct manufacturers and model names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemsAndModels {
    pub oems: Vec<String>,
    pub models: Vec<String>,
}

/// Distinct sensor lists and operating systems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorsAndPlatforms {
    pub sensors: Vec<String>,
    pub platforms: Vec<String>,
}

/// Distinct present values of a text column, in first-occurrence order.
///
/// Numeric columns have no text and yield an empty list.
pub fn unique_values(dataset: &Dataset, column: Column) -> Vec<String> {
    let seen: IndexSet<&str> = dataset.iter().filter_map(|r| r.text(column)).collect();
    seen.into_iter().map(str::to_string).collect()
}

pub fn unique_oems_and_models(dataset: &Dataset) -> OemsAndModels {
    OemsAndModels {
        oems: unique_values(dataset, Column::Oem),
        models: unique_values(dataset, Column::Model),
    }
}

pub fn unique_sensors_and_platforms(dataset: &Dataset) -> SensorsAndPlatforms {
    SensorsAndPlatforms {
        sensors: unique_values(dataset, Column::FeaturesSensors),
        platforms: unique_values(dataset, Column::PlatformOs),
    }
}
