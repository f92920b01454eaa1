//! CLI command implementations.
//!
//! Commands write to any `Write` so the interactive menu and the one-shot
//! subcommands share the same output.

pub mod menu;
pub mod mutate;
pub mod queries;
pub mod reports;
pub mod status;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
