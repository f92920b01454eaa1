//! Main Catalog struct and public API.

use std::path::{Path, PathBuf};

use crate::analysis::{
    self, DatasetSummary, OemsAndModels, SensorsAndPlatforms, WeightLeader, YearMismatch,
    YearTally,
};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::input::{Parser, ParserConfig};
use crate::mutation::{self, DeleteOutcome, SearchOutcome};
use crate::report;

/// File locations and parsing options for a session.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Dataset loaded at startup.
    pub data_path: PathBuf,
    /// File rewritten by row deletion.
    pub mutation_path: PathBuf,
    /// Raw file searched by OEM.
    pub search_path: PathBuf,
    /// Directory that receives reports and exports.
    pub output_dir: PathBuf,
    /// Parser configuration.
    pub parser: ParserConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("cells.csv"),
            mutation_path: PathBuf::from("test_cells.csv"),
            search_path: PathBuf::from("cells.csv"),
            output_dir: PathBuf::from("."),
            parser: ParserConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Path of a report file inside the output directory.
    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

/// A loaded dataset plus the files its operations read and write.
///
/// The dataset is loaded once and never changes; deletions rewrite
/// `mutation_path` on disk and are only visible after reopening.
pub struct Catalog {
    config: CatalogConfig,
    parser: Parser,
    dataset: Dataset,
}

impl Catalog {
    /// Load the configured data file.
    pub fn open(config: CatalogConfig) -> Result<Self> {
        let parser = Parser::with_config(config.parser.clone());
        let dataset = Dataset::load_with(&parser, &config.data_path)?;
        Ok(Self {
            config,
            parser,
            dataset,
        })
    }

    /// Open with default configuration rooted at `data_path`.
    pub fn open_path(data_path: impl AsRef<Path>) -> Result<Self> {
        let data_path = data_path.as_ref().to_path_buf();
        Self::open(CatalogConfig {
            search_path: data_path.clone(),
            data_path,
            ..CatalogConfig::default()
        })
    }

    /// Wrap a dataset that was built elsewhere.
    pub fn with_dataset(config: CatalogConfig, dataset: Dataset) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            config,
            parser,
            dataset,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn unique_oems_and_models(&self) -> OemsAndModels {
        analysis::unique_oems_and_models(&self.dataset)
    }

    pub fn unique_sensors_and_platforms(&self) -> SensorsAndPlatforms {
        analysis::unique_sensors_and_platforms(&self.dataset)
    }

    /// Write the OEM/model listing and return where it went.
    pub fn write_unique_oems_and_models(&self) -> Result<PathBuf> {
        let path = self.config.output_file(report::UNIQUE_OEMS_AND_MODELS_FILE);
        report::write_unique_oems_and_models(&self.unique_oems_and_models(), &path)?;
        Ok(path)
    }

    /// Write the sensor/platform listing and return where it went.
    pub fn write_unique_sensors_and_platforms(&self) -> Result<PathBuf> {
        let path = self
            .config
            .output_file(report::UNIQUE_FEATURES_AND_PLATFORMS_FILE);
        report::write_unique_sensors_and_platforms(&self.unique_sensors_and_platforms(), &path)?;
        Ok(path)
    }

    pub fn highest_average_weight(&self) -> Option<WeightLeader> {
        analysis::highest_average_weight(&self.dataset)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = YearMismatch> + '_ {
        analysis::announced_vs_released_mismatches(&self.dataset)
    }

    pub fn single_sensor_phones(&self) -> usize {
        analysis::count_single_sensor_phones(&self.dataset)
    }

    pub fn peak_launch_year(&self) -> Option<YearTally> {
        analysis::peak_launch_year(&self.dataset)
    }

    pub fn summary(&self) -> DatasetSummary {
        analysis::summarize(&self.dataset)
    }

    /// Delete rows of `model` from the mutation target. The loaded dataset is unchanged.
    pub fn delete_model(&self, model: &str) -> Result<DeleteOutcome> {
        mutation::delete_rows_by_model_with(&self.parser, &self.config.mutation_path, model)
    }

    /// Search the raw search source for `oem` and write the report file.
    pub fn search_oem(&self, oem: &str) -> Result<(SearchOutcome, PathBuf)> {
        let output = self.config.output_file(report::SEARCH_RESULTS_FILE);
        let outcome =
            mutation::search_by_oem_with(&self.parser, &self.config.search_path, oem, &output)?;
        Ok((outcome, output))
    }

    /// Write the normalized dataset as CSV and return where it went.
    pub fn export_cleaned(&self) -> Result<PathBuf> {
        let path = self.config.output_file(report::CLEANED_CSV_FILE);
        report::write_cleaned_csv(&self.dataset, &path, self.config.parser.delimiter)?;
        Ok(path)
    }
}
