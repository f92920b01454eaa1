//! Plain-text reports and the cleaned-CSV export.

use std::path::Path;

use tracing::info;

use crate::analysis::{OemsAndModels, SensorsAndPlatforms};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::output::{encode_csv, write_atomic};
use crate::schema::Column;

/// Default file name for the OEM/model listing.
pub const UNIQUE_OEMS_AND_MODELS_FILE: &str = "unique_oem_and_models.txt";
/// Default file name for the sensor/platform listing.
pub const UNIQUE_FEATURES_AND_PLATFORMS_FILE: &str = "unique_features_and_platforms.txt";
/// Default file name for OEM search results.
pub const SEARCH_RESULTS_FILE: &str = "search_results.txt";
/// Default file name for the normalized dataset.
pub const CLEANED_CSV_FILE: &str = "cleaned_cells.csv";

/// Two titled lists separated by a blank line, one entry per line.
fn render_sections(first_title: &str, first: &[String], second_title: &str, second: &[String]) -> String {
    let mut out = String::new();
    out.push_str(first_title);
    out.push('\n');
    for value in first {
        out.push_str(value);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(second_title);
    out.push('\n');
    for value in second {
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn render_unique_oems_and_models(uniques: &OemsAndModels) -> String {
    render_sections("Unique OEMs:", &uniques.oems, "Unique Models:", &uniques.models)
}

pub fn render_unique_sensors_and_platforms(uniques: &SensorsAndPlatforms) -> String {
    render_sections(
        "Unique Feature Sensors:",
        &uniques.sensors,
        "Unique Platform OS:",
        &uniques.platforms,
    )
}

pub fn write_unique_oems_and_models(uniques: &OemsAndModels, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_atomic(path, render_unique_oems_and_models(uniques).as_bytes())?;
    info!(
        path = %path.display(),
        oems = uniques.oems.len(),
        models = uniques.models.len(),
        "wrote unique OEMs and models"
    );
    Ok(())
}

pub fn write_unique_sensors_and_platforms(
    uniques: &SensorsAndPlatforms,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    write_atomic(path, render_unique_sensors_and_platforms(uniques).as_bytes())?;
    info!(
        path = %path.display(),
        sensors = uniques.sensors.len(),
        platforms = uniques.platforms.len(),
        "wrote unique sensors and platforms"
    );
    Ok(())
}

/// Write the normalized dataset with the canonical header. Absent values become empty cells.
pub fn write_cleaned_csv(dataset: &Dataset, path: impl AsRef<Path>, delimiter: u8) -> Result<()> {
    let path = path.as_ref();
    let rows = dataset.iter().map(|record| {
        Column::ALL
            .iter()
            .map(|&column| record.get(column).map(|v| v.to_string()).unwrap_or_default())
            .collect::<Vec<String>>()
    });

    let bytes = encode_csv(Column::header(), rows, delimiter)?;
    write_atomic(path, &bytes)?;
    info!(path = %path.display(), records = dataset.len(), "wrote cleaned dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_unique_oems_and_models_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(UNIQUE_OEMS_AND_MODELS_FILE);
        let uniques = OemsAndModels {
            oems: vec!["OEM1".into(), "OEM2".into()],
            models: vec!["ModelA".into(), "ModelB".into()],
        };

        write_unique_oems_and_models(&uniques, &path).unwrap();

        let lines: Vec<String> = fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect();
        assert_eq!(
            lines,
            vec!["Unique OEMs:", "OEM1", "OEM2", "", "Unique Models:", "ModelA", "ModelB"]
        );
    }

    #[test]
    fn test_unique_sensors_layout() {
        let uniques = SensorsAndPlatforms {
            sensors: vec!["Sensor1".into()],
            platforms: vec![],
        };
        assert_eq!(
            render_unique_sensors_and_platforms(&uniques),
            "Unique Feature Sensors:\nSensor1\n\nUnique Platform OS:\n"
        );
    }

    #[test]
    fn test_cleaned_csv_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CLEANED_CSV_FILE);
        let dataset = Dataset::from_records(vec![Record::from_row(&[
            "Samsung",
            "Galaxy, Mini",
            "2012, May",
            "Released 2012, June",
            "-",
            "120 g",
            "Yes",
            "",
            "4.0 inches",
            "480 x 800",
            "Accelerometer",
            "Android 4.1, TouchWiz",
        ])]);

        write_cleaned_csv(&dataset, &path, b',').unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("oem,model,launch_announced,launch_status,"));
        assert!(text.ends_with(
            "\nSamsung,\"Galaxy, Mini\",2012,2012,,120.0,,,4.0,480 x 800,Accelerometer,Android 4.1\n"
        ));
    }
}
