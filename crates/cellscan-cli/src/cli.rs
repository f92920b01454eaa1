//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use cellscan::{CatalogConfig, ParserConfig};

/// cellscan: clean and query phone specification datasets
#[derive(Parser)]
#[command(name = "cellscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run (default: interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub files: FileArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where the session reads and writes.
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Dataset loaded at startup
    #[arg(long, global = true, value_name = "FILE", default_value = "cells.csv")]
    pub data: PathBuf,

    /// File rewritten by row deletion
    #[arg(long, global = true, value_name = "FILE", default_value = "test_cells.csv")]
    pub mutation_target: PathBuf,

    /// Raw file searched by OEM (default: the --data file)
    #[arg(long, global = true, value_name = "FILE")]
    pub search_source: Option<PathBuf>,

    /// Directory for reports and exports
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Only load the first N data rows
    #[arg(long, global = true, value_name = "N")]
    pub max_rows: Option<usize>,
}

impl FileArgs {
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            data_path: self.data.clone(),
            mutation_path: self.mutation_target.clone(),
            search_path: self
                .search_source
                .clone()
                .unwrap_or_else(|| self.data.clone()),
            output_dir: self.output_dir.clone(),
            parser: ParserConfig {
                max_rows: self.max_rows,
                ..ParserConfig::default()
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive numbered menu
    Menu,

    /// Write unique OEMs/models and sensors/platforms to text files
    Uniques,

    /// Show the OEM with the highest average body weight
    Weight,

    /// List phones announced in one year and released in another
    Mismatches {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count phones with exactly one feature sensor
    Sensors,

    /// Show the year with the most launches after 1999
    PeakYear,

    /// Delete every row of a model from the mutation target
    Delete {
        /// Exact, case-sensitive model name
        #[arg(value_name = "MODEL")]
        model: String,
    },

    /// Search the raw data for an OEM and write the results file
    Search {
        /// OEM name, matched ignoring case
        #[arg(value_name = "OEM")]
        oem: String,
    },

    /// Export the normalized dataset as CSV
    Clean,

    /// Show the loaded file and how many values survived cleaning
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
