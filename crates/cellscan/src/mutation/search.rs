//! Case-insensitive OEM search over raw rows.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::read_whole_table;
use crate::error::Result;
use crate::input::{Parser, RawTable};
use crate::output::write_atomic;
use crate::schema::Column;

/// How many rows a search matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub matches: usize,
}

/// Indices of rows whose `oem` cell equals `oem`, ignoring case.
pub fn find_rows_by_oem(table: &RawTable, oem: &str) -> Vec<usize> {
    let Some(oem_col) = table.column_index(Column::Oem.name()) else {
        return Vec::new();
    };
    let wanted = oem.to_lowercase();

    (0..table.row_count())
        .filter(|&row| {
            table
                .get(row, oem_col)
                .is_some_and(|cell| cell.to_lowercase() == wanted)
        })
        .collect()
}

/// Render the search report: a summary line, then each matching row's raw fields.
pub fn render_search_report(table: &RawTable, oem: &str, rows: &[usize]) -> Result<String> {
    if rows.is_empty() {
        return Ok(format!("No data found for OEM: {}\n", oem));
    }

    let mut out = format!("Found {} row(s) for OEM: {}\n", rows.len(), oem);
    for (i, &row) in rows.iter().enumerate() {
        let fields: IndexMap<&str, &str> = table.labelled_row(row).into_iter().collect();
        out.push_str(&format!("Row {}: {}\n", i + 1, serde_json::to_string(&fields)?));
    }
    Ok(out)
}

/// Search `source` for `oem` and write the report to `output`.
pub fn search_by_oem(
    source: impl AsRef<Path>,
    oem: &str,
    output: impl AsRef<Path>,
) -> Result<SearchOutcome> {
    search_by_oem_with(&Parser::new(), source, oem, output)
}

/// [`search_by_oem`] with a configured parser.
pub fn search_by_oem_with(
    parser: &Parser,
    source: impl AsRef<Path>,
    oem: &str,
    output: impl AsRef<Path>,
) -> Result<SearchOutcome> {
    let (source, output) = (source.as_ref(), output.as_ref());
    let table = read_whole_table(parser, source)?;

    let rows = find_rows_by_oem(&table, oem);
    write_atomic(output, render_search_report(&table, oem, &rows)?.as_bytes())?;
    info!(
        source = %source.display(),
        output = %output.display(),
        oem,
        matches = rows.len(),
        "searched by OEM"
    );

    Ok(SearchOutcome {
        matches: rows.len(),
    })
}
