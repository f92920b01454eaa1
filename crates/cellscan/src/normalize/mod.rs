//! Field normalization: raw spreadsheet cells to typed, nullable values.
//!
//! The typed functions in [`rules`] are what [`Record`](crate::dataset::Record)
//! construction uses. [`normalize`] dispatches on a [`Column`] when the caller
//! needs one entry point for every column.

pub mod rules;

pub use rules::{
    announced_year, body_sim, body_weight, display_size, features_sensors, first_year_token,
    is_numeric, is_placeholder, launch_status, platform_os, text,
};

use crate::schema::{Column, FieldValue};

/// Normalize one raw cell for the given column.
pub fn normalize(raw: Option<&str>, column: Column) -> Option<FieldValue> {
    match column {
        Column::Oem
        | Column::Model
        | Column::BodyDimensions
        | Column::DisplayType
        | Column::DisplayResolution => text(raw).map(FieldValue::Text),
        Column::LaunchAnnounced => announced_year(raw).map(FieldValue::Year),
        Column::LaunchStatus => launch_status(raw).map(FieldValue::Text),
        Column::BodyWeight => body_weight(raw).map(FieldValue::Float),
        Column::BodySim => body_sim(raw).map(FieldValue::Text),
        Column::DisplaySize => display_size(raw).map(FieldValue::Float),
        Column::FeaturesSensors => features_sensors(raw).map(FieldValue::Text),
        Column::PlatformOs => platform_os(raw).map(FieldValue::Text),
    }
}

/// Normalize by header name. Unknown headers pass the raw value through untouched.
pub fn normalize_named(raw: Option<&str>, header: &str) -> Option<FieldValue> {
    match Column::from_name(header) {
        Some(column) => normalize(raw, column),
        None => raw.map(|v| FieldValue::Text(v.to_string())),
    }
}
