//! Row deletion by model name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::read_whole_table;
use crate::error::Result;
use crate::input::Parser;
use crate::output::{encode_csv, write_atomic};
use crate::schema::Column;

/// What a deletion did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub removed: usize,
    pub remaining: usize,
}

/// Remove every row whose `model` cell equals `model` exactly (case-sensitive).
pub fn delete_rows_by_model(path: impl AsRef<Path>, model: &str) -> Result<DeleteOutcome> {
    delete_rows_by_model_with(&Parser::new(), path, model)
}

/// [`delete_rows_by_model`] with a configured parser.
///
/// The file is left untouched when nothing matches; otherwise the header and
/// remaining rows are staged in a temporary file and renamed over the original.
pub fn delete_rows_by_model_with(
    parser: &Parser,
    path: impl AsRef<Path>,
    model: &str,
) -> Result<DeleteOutcome> {
    let path = path.as_ref();
    let mut table = read_whole_table(parser, path)?;

    let Some(model_col) = table.column_index(Column::Model.name()) else {
        warn!(path = %path.display(), "no model column; nothing deleted");
        return Ok(DeleteOutcome {
            removed: 0,
            remaining: table.row_count(),
        });
    };

    let before = table.row_count();
    table
        .rows
        .retain(|row| row.get(model_col).map(String::as_str) != Some(model));
    let removed = before - table.row_count();

    if removed > 0 {
        let bytes = encode_csv(&table.headers, &table.rows, parser.config().delimiter)?;
        write_atomic(path, &bytes)?;
        info!(path = %path.display(), model, removed, "deleted rows");
    }

    Ok(DeleteOutcome {
        removed,
        remaining: table.row_count(),
    })
}
