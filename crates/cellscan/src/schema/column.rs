//! The twelve known columns of a phone specification file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::ValueType;
use crate::error::CellscanError;

/// A column of the phone dataset, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Oem,
    Model,
    LaunchAnnounced,
    LaunchStatus,
    BodyDimensions,
    BodyWeight,
    BodySim,
    DisplayType,
    DisplaySize,
    DisplayResolution,
    FeaturesSensors,
    PlatformOs,
}

impl Column {
    /// Every column, in the order the header lists them.
    pub const ALL: [Column; 12] = [
        Column::Oem,
        Column::Model,
        Column::LaunchAnnounced,
        Column::LaunchStatus,
        Column::BodyDimensions,
        Column::BodyWeight,
        Column::BodySim,
        Column::DisplayType,
        Column::DisplaySize,
        Column::DisplayResolution,
        Column::FeaturesSensors,
        Column::PlatformOs,
    ];

    /// Header spelling used in the CSV file.
    pub fn name(self) -> &'static str {
        match self {
            Column::Oem => "oem",
            Column::Model => "model",
            Column::LaunchAnnounced => "launch_announced",
            Column::LaunchStatus => "launch_status",
            Column::BodyDimensions => "body_dimensions",
            Column::BodyWeight => "body_weight",
            Column::BodySim => "body_sim",
            Column::DisplayType => "display_type",
            Column::DisplaySize => "display_size",
            Column::DisplayResolution => "display_resolution",
            Column::FeaturesSensors => "features_sensors",
            Column::PlatformOs => "platform_os",
        }
    }

    /// Look a column up by its header spelling.
    pub fn from_name(name: &str) -> Option<Column> {
        let name = name.trim();
        Column::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Zero-based position in the canonical header.
    pub fn position(self) -> usize {
        self as usize
    }

    /// Type a normalized value of this column carries.
    pub fn value_type(self) -> ValueType {
        match self {
            Column::LaunchAnnounced => ValueType::Year,
            Column::BodyWeight | Column::DisplaySize => ValueType::Float,
            _ => ValueType::Text,
        }
    }

    /// The header row of a canonical file.
    pub fn header() -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = CellscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::from_name(s).ok_or_else(|| CellscanError::Config(format!("Unknown column: {}", s)))
    }
}
