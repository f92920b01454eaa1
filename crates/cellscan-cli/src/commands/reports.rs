//! Report commands that write files into the output directory.

use std::io::Write;

use cellscan::Catalog;
use colored::Colorize;

use super::CommandResult;

pub fn oems_and_models<W: Write>(catalog: &Catalog, out: &mut W) -> CommandResult {
    let path = catalog.write_unique_oems_and_models()?;
    writeln!(
        out,
        "Unique OEMs and Models have been written to {}",
        path.display().to_string().green()
    )?;
    Ok(())
}

pub fn sensors_and_platforms<W: Write>(catalog: &Catalog, out: &mut W) -> CommandResult {
    let path = catalog.write_unique_sensors_and_platforms()?;
    writeln!(
        out,
        "Unique Feature Sensors and Platform OS values have been written to {}",
        path.display().to_string().green()
    )?;
    Ok(())
}

/// Both unique-value listings.
pub fn uniques<W: Write>(catalog: &Catalog, out: &mut W) -> CommandResult {
    oems_and_models(catalog, out)?;
    sensors_and_platforms(catalog, out)
}

pub fn clean<W: Write>(catalog: &Catalog, out: &mut W) -> CommandResult {
    let path = catalog.export_cleaned()?;
    writeln!(
        out,
        "Cleaned dataset ({} rows) has been written to {}",
        catalog.dataset().len(),
        path.display().to_string().green()
    )?;
    Ok(())
}
