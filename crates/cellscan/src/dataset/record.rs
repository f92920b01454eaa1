//! Typed phone record.

use serde::{Deserialize, Serialize};

use crate::normalize::{self, first_year_token};
use crate::schema::{Column, FieldValue};

/// One cleaned row of the phone dataset.
///
/// Every field is either `None` or a value of the column's type. Empty
/// strings, dashes and unparsed fragments never survive normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub oem: Option<String>,
    pub model: Option<String>,
    pub launch_announced: Option<i32>,
    pub launch_status: Option<String>,
    pub body_dimensions: Option<String>,
    /// Grams.
    pub body_weight: Option<f64>,
    pub body_sim: Option<String>,
    pub display_type: Option<String>,
    /// Inches.
    pub display_size: Option<f64>,
    pub display_resolution: Option<String>,
    pub features_sensors: Option<String>,
    pub platform_os: Option<String>,
}

impl Record {
    /// Build a record from raw cells, looked up per column.
    pub fn from_raw<'a>(mut cell: impl FnMut(Column) -> Option<&'a str>) -> Self {
        Self {
            oem: normalize::text(cell(Column::Oem)),
            model: normalize::text(cell(Column::Model)),
            launch_announced: normalize::announced_year(cell(Column::LaunchAnnounced)),
            launch_status: normalize::launch_status(cell(Column::LaunchStatus)),
            body_dimensions: normalize::text(cell(Column::BodyDimensions)),
            body_weight: normalize::body_weight(cell(Column::BodyWeight)),
            body_sim: normalize::body_sim(cell(Column::BodySim)),
            display_type: normalize::text(cell(Column::DisplayType)),
            display_size: normalize::display_size(cell(Column::DisplaySize)),
            display_resolution: normalize::text(cell(Column::DisplayResolution)),
            features_sensors: normalize::features_sensors(cell(Column::FeaturesSensors)),
            platform_os: normalize::platform_os(cell(Column::PlatformOs)),
        }
    }

    /// Build a record from a row in canonical column order.
    pub fn from_row(row: &[&str]) -> Self {
        Self::from_raw(|column| row.get(column.position()).copied())
    }

    /// The value of one column, dynamically typed.
    pub fn get(&self, column: Column) -> Option<FieldValue> {
        match column {
            Column::Oem => self.oem.clone().map(FieldValue::Text),
            Column::Model => self.model.clone().map(FieldValue::Text),
            Column::LaunchAnnounced => self.launch_announced.map(FieldValue::Year),
            Column::LaunchStatus => self.launch_status.clone().map(FieldValue::Text),
            Column::BodyDimensions => self.body_dimensions.clone().map(FieldValue::Text),
            Column::BodyWeight => self.body_weight.map(FieldValue::Float),
            Column::BodySim => self.body_sim.clone().map(FieldValue::Text),
            Column::DisplayType => self.display_type.clone().map(FieldValue::Text),
            Column::DisplaySize => self.display_size.map(FieldValue::Float),
            Column::DisplayResolution => self.display_resolution.clone().map(FieldValue::Text),
            Column::FeaturesSensors => self.features_sensors.clone().map(FieldValue::Text),
            Column::PlatformOs => self.platform_os.clone().map(FieldValue::Text),
        }
    }

    /// Whether a column holds a value.
    pub fn is_present(&self, column: Column) -> bool {
        match column {
            Column::LaunchAnnounced => self.launch_announced.is_some(),
            Column::BodyWeight => self.body_weight.is_some(),
            Column::DisplaySize => self.display_size.is_some(),
            _ => self.text(column).is_some(),
        }
    }

    /// Borrow a text column without cloning. Numeric columns yield `None`.
    pub fn text(&self, column: Column) -> Option<&str> {
        let field = match column {
            Column::Oem => &self.oem,
            Column::Model => &self.model,
            Column::LaunchStatus => &self.launch_status,
            Column::BodyDimensions => &self.body_dimensions,
            Column::BodySim => &self.body_sim,
            Column::DisplayType => &self.display_type,
            Column::DisplayResolution => &self.display_resolution,
            Column::FeaturesSensors => &self.features_sensors,
            Column::PlatformOs => &self.platform_os,
            Column::LaunchAnnounced | Column::BodyWeight | Column::DisplaySize => return None,
        };
        field.as_deref()
    }

    /// Release year re-derived from `launch_status`. Terminal statuses have none.
    pub fn release_year(&self) -> Option<i32> {
        self.launch_status
            .as_deref()
            .and_then(first_year_token)
            .and_then(|y| y.parse().ok())
    }
}
