//! Query commands: weight, mismatches, sensors, peak year.

use std::io::Write;

use cellscan::{Catalog, YearMismatch};
use colored::Colorize;

use super::CommandResult;

/// Shown when a phone has no OEM or model.
const UNKNOWN: &str = "-";

pub fn weight<W: Write>(catalog: &Catalog, out: &mut W) -> CommandResult {
    match catalog.highest_average_weight() {
        Some(leader) => writeln!(
            out,
            "The company (OEM) with the highest average phone body_weight is {} with an average weight of {} grams.",
            leader.oem.bold(),
            format!("{:.2}", leader.average_grams).cyan()
        )?,
        None => writeln!(
            out,
            "{}",
            "Could not determine the OEM with the highest average weight.".yellow()
        )?,
    }
    Ok(())
}

pub fn mismatches<W: Write>(catalog: &Catalog, json: bool, out: &mut W) -> CommandResult {
    let found: Vec<YearMismatch> = catalog.mismatches().collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
        return Ok(());
    }

    if found.is_empty() {
        writeln!(
            out,
            "{}",
            "No phones were found that were announced in one year and released in another."
                .yellow()
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        "Phones announced and released in different years:".bold()
    )?;
    for phone in &found {
        writeln!(
            out,
            "OEM: {}, Model: {}, Announced: {}, Released: {}",
            phone.oem.as_deref().unwrap_or(UNKNOWN),
            phone.model.as_deref().unwrap_or(UNKNOWN),
            phone.announced_year,
            phone.release_year
        )?;
    }
    Ok(())
}

pub fn sensors<W: Write>(catalog: &Catalog, out: &mut W) -> CommandResult {
    writeln!(
        out,
        "Number of phones with only one feature sensor: {}",
        catalog.single_sensor_phones().to_string().cyan()
    )?;
    Ok(())
}

pub fn peak_year<W: Write>(catalog: &Catalog, out: &mut W) -> CommandResult {
    match catalog.peak_launch_year() {
        Some(peak) => writeln!(
            out,
            "The year with the most phone launches (after 1999) is {} with {} launches.",
            peak.year.to_string().bold(),
            peak.launches.to_string().cyan()
        )?,
        None => writeln!(
            out,
            "{}",
            "No data available for phone launches after 1999.".yellow()
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{catalog, render};
    use cellscan::{CatalogConfig, Dataset};

    fn empty() -> Catalog {
        colored::control::set_override(false);
        Catalog::with_dataset(CatalogConfig::default(), Dataset::default())
    }

    #[test]
    fn test_weight() {
        let (_dir, catalog) = catalog();
        // Apple: 137, Nokia: (120 + 133) / 2 = 126.5
        assert_eq!(
            render(|out| weight(&catalog, out).unwrap()),
            "The company (OEM) with the highest average phone body_weight is Apple with an average weight of 137.00 grams.\n"
        );
        assert_eq!(
            render(|out| weight(&empty(), out).unwrap()),
            "Could not determine the OEM with the highest average weight.\n"
        );
    }

    #[test]
    fn test_mismatches_text_and_json() {
        let (_dir, catalog) = catalog();

        let text = render(|out| mismatches(&catalog, false, out).unwrap());
        assert_eq!(
            text,
            "Phones announced and released in different years:\n\
             OEM: Nokia, Model: N95, Announced: 2006, Released: 2007\n"
        );

        let json = render(|out| mismatches(&catalog, true, out).unwrap());
        let parsed: Vec<YearMismatch> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].release_year, 2007);

        let none = render(|out| mismatches(&empty(), false, out).unwrap());
        assert!(none.starts_with("No phones were found"));
    }

    #[test]
    fn test_sensors_and_peak_year() {
        let (_dir, catalog) = catalog();

        assert_eq!(
            render(|out| sensors(&catalog, out).unwrap()),
            "Number of phones with only one feature sensor: 1\n"
        );
        // 2006, 2000 and 2010 each appear once; the earliest wins.
        assert_eq!(
            render(|out| peak_year(&catalog, out).unwrap()),
            "The year with the most phone launches (after 1999) is 2000 with 1 launches.\n"
        );
        assert_eq!(
            render(|out| peak_year(&empty(), out).unwrap()),
            "No data available for phone launches after 1999.\n"
        );
    }
}
