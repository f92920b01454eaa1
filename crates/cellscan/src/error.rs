//! Error types for the cellscan library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cellscan operations.
///
/// Malformed cells are never errors: the normalizer coerces them to absent.
/// Everything here is an I/O or structural failure of a whole file.
#[derive(Debug, Error)]
pub enum CellscanError {
    /// Error reading, writing or replacing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file has no header row or no columns.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CellscanError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CellscanError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for cellscan operations.
pub type Result<T> = std::result::Result<T, CellscanError>;
