//! Atomic file output.
//!
//! Every file cellscan writes, whether a rewritten source or a report, goes
//! to a temporary file beside its target and is renamed into place, so a
//! failed write never leaves a truncated target behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{CellscanError, Result};

/// Replace `path` with `contents` in one rename.
///
/// An existing target keeps its permissions. A symlinked target is resolved
/// first, so the link stays in place and its destination is replaced.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| CellscanError::io(dir, e))?;
    }

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| CellscanError::io(dir, e))?;
    staged
        .write_all(contents)
        .and_then(|_| match permissions {
            Some(permissions) => staged.as_file().set_permissions(permissions),
            None => Ok(()),
        })
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| CellscanError::io(staged.path(), e))?;

    staged
        .persist(&target)
        .map_err(|e| CellscanError::io(&target, e.error))?;

    debug!(path = %target.display(), bytes = contents.len(), "replaced file");
    Ok(())
}

/// Encode a header and rows as delimited text. Rows may be ragged.
pub fn encode_csv<H, R, F>(headers: H, rows: R, delimiter: u8) -> Result<Vec<u8>>
where
    H: IntoIterator,
    H::Item: AsRef<[u8]>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| CellscanError::Csv(e.into_error().into()))
}
