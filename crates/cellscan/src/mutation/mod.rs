//! File-level operations on the raw source table.
//!
//! These work on the unnormalized rows, not on [`Record`](crate::dataset::Record)s,
//! and never update a loaded [`Dataset`](crate::dataset::Dataset).

mod delete;
mod search;

pub use delete::{DeleteOutcome, delete_rows_by_model, delete_rows_by_model_with};
pub use search::{
    SearchOutcome, find_rows_by_oem, render_search_report, search_by_oem, search_by_oem_with,
};

use std::path::Path;

use crate::error::Result;
use crate::input::{Parser, ParserConfig, RawTable};

/// Read every row of `path`, ignoring any row cap on the parser.
///
/// A capped read followed by a rewrite would silently drop the tail of the file.
fn read_whole_table(parser: &Parser, path: &Path) -> Result<RawTable> {
    let config = ParserConfig {
        max_rows: None,
        ..parser.config().clone()
    };
    let (table, _) = Parser::with_config(config).parse_file(path)?;
    Ok(table)
}
