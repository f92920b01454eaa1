//! Status command - show the loaded file and per-column fill.

use std::io::Write;

use cellscan::Catalog;
use colored::Colorize;

use super::CommandResult;

pub fn run<W: Write>(catalog: &Catalog, json_output: bool, out: &mut W) -> CommandResult {
    let summary = catalog.summary();
    let source = catalog.dataset().source();

    if json_output {
        let status = serde_json::json!({
            "source": source,
            "records": summary.records,
            "columns": summary.columns,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;
        return Ok(());
    }

    match source {
        Some(source) => {
            writeln!(
                out,
                "{} {}",
                "Dataset status for".cyan().bold(),
                source.file.white()
            )?;
            writeln!(out, "  Path:    {}", source.path.display())?;
            writeln!(out, "  Hash:    {}", source.hash)?;
            writeln!(out, "  Size:    {} bytes", source.size_bytes)?;
            writeln!(out, "  Loaded:  {}", source.loaded_at.to_rfc3339())?;
        }
        None => writeln!(out, "{}", "Dataset status".cyan().bold())?,
    }
    writeln!(out, "  Records: {}", summary.records.to_string().white().bold())?;
    writeln!(out)?;

    writeln!(out, "{}", "Columns:".yellow().bold())?;
    for column in &summary.columns {
        let pct = column.absent_percentage();
        let absent = format!("{:5.1}% absent", pct);
        let absent = if pct == 0.0 {
            absent.green()
        } else if pct < 50.0 {
            absent.yellow()
        } else {
            absent.red()
        };
        writeln!(
            out,
            "  {:<20} {:>6} present  {}",
            column.column.name(),
            column.present,
            absent
        )?;
    }

    Ok(())
}
