//! File-level commands: delete by model, search by OEM.

use std::io::Write;

use cellscan::Catalog;
use colored::Colorize;

use super::CommandResult;

pub fn delete<W: Write>(catalog: &Catalog, model: &str, out: &mut W) -> CommandResult {
    let outcome = catalog.delete_model(model)?;
    let target = catalog.config().mutation_path.display();

    if outcome.removed == 0 {
        writeln!(
            out,
            "{}",
            format!("No rows with model '{}' found in {}", model, target).yellow()
        )?;
    } else {
        writeln!(
            out,
            "Row(s) with model '{}' have been deleted from {} ({} removed, {} remaining)",
            model.bold(),
            target,
            outcome.removed.to_string().red(),
            outcome.remaining
        )?;
    }
    Ok(())
}

pub fn search<W: Write>(catalog: &Catalog, oem: &str, out: &mut W) -> CommandResult {
    let (outcome, path) = catalog.search_oem(oem.trim())?;
    writeln!(
        out,
        "Search completed. {} matching row(s). Results are in '{}'.",
        outcome.matches.to_string().cyan(),
        path.display().to_string().green()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{CELLS, catalog, render};
    use cellscan::report;
    use std::fs;

    #[test]
    fn test_delete_existing_model() {
        let (dir, catalog) = catalog();

        let text = render(|out| delete(&catalog, "3310", out).unwrap());
        assert!(text.starts_with("Row(s) with model '3310' have been deleted from "));
        assert!(text.ends_with("(1 removed, 2 remaining)\n"));

        let rewritten = fs::read_to_string(dir.path().join("test_cells.csv")).unwrap();
        assert!(!rewritten.contains("3310"));
    }

    #[test]
    fn test_delete_missing_model_leaves_file() {
        let (dir, catalog) = catalog();

        let text = render(|out| delete(&catalog, "n95", out).unwrap());
        assert!(text.starts_with("No rows with model 'n95' found in "));
        assert_eq!(fs::read_to_string(dir.path().join("test_cells.csv")).unwrap(), CELLS);
    }

    #[test]
    fn test_search_trims_input() {
        let (dir, catalog) = catalog();

        let text = render(|out| search(&catalog, "  nokia \n", out).unwrap());
        assert!(text.starts_with("Search completed. 2 matching row(s)."));

        let report = fs::read_to_string(dir.path().join(report::SEARCH_RESULTS_FILE)).unwrap();
        assert!(report.starts_with("Found 2 row(s) for OEM: nokia\n"));
    }
}
