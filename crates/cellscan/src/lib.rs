//! cellscan: normalization and analysis of messy phone specification datasets.
//!
//! A spreadsheet export of phone specifications is loaded once, each cell is
//! cleaned into a typed, nullable value, and a fixed set of queries runs over
//! the resulting records. Two operations (row deletion, OEM search) work on
//! the raw file instead.
//!
//! # Core Principles
//!
//! - **Absent is not empty**: unusable cells become `None`, never `""` or `"-"`
//! - **Load once**: the in-memory [`Dataset`] is immutable after loading
//! - **Atomic writes**: files are replaced by rename, never rewritten in place
//!
//! # Example
//!
//! ```no_run
//! use cellscan::Catalog;
//!
//! let catalog = Catalog::open_path("cells.csv").unwrap();
//!
//! if let Some(leader) = catalog.highest_average_weight() {
//!     println!("{} averages {:.2} g", leader.oem, leader.average_grams);
//! }
//! println!("Single-sensor phones: {}", catalog.single_sensor_phones());
//! ```

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod input;
pub mod mutation;
pub mod normalize;
pub mod output;
pub mod report;
pub mod schema;

mod catalog;

pub use crate::catalog::{Catalog, CatalogConfig};
pub use analysis::{DatasetSummary, OemsAndModels, SensorsAndPlatforms, WeightLeader, YearMismatch, YearTally};
pub use dataset::{Dataset, Record};
pub use error::{CellscanError, Result};
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use mutation::{DeleteOutcome, SearchOutcome};
pub use normalize::{normalize, normalize_named};
pub use schema::{Column, FieldValue, ValueType};
