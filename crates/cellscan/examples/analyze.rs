//! Example: Clean a phone dataset and print every query result.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Example:
//!   cargo run --example analyze -- cells.csv

use std::env;
use std::path::Path;

use cellscan::Catalog;

fn main() -> cellscan::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- cells.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("cellscan analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let catalog = Catalog::open_path(path)?;

    if let Some(source) = catalog.dataset().source() {
        println!("## Source Metadata");
        println!("  File: {}", source.file);
        println!("  Rows: {}", source.row_count);
        println!("  Columns: {}", source.column_count);
        println!("  Hash: {}", source.hash);
        println!();
    }

    println!("## Column Fill");
    for column in catalog.summary().columns {
        println!(
            "  {:<20} {:>6} present ({:.1}% absent)",
            column.column.name(),
            column.present,
            column.absent_percentage()
        );
    }
    println!();

    let uniques = catalog.unique_oems_and_models();
    println!("## Unique Values");
    println!("  OEMs: {}", uniques.oems.len());
    println!("  Models: {}", uniques.models.len());
    let features = catalog.unique_sensors_and_platforms();
    println!("  Sensor lists: {}", features.sensors.len());
    println!("  Platforms: {}", features.platforms.len());
    println!();

    println!("## Queries");
    match catalog.highest_average_weight() {
        Some(leader) => println!(
            "  Heaviest OEM: {} ({:.2} g over {} phones)",
            leader.oem, leader.average_grams, leader.phones
        ),
        None => println!("  Heaviest OEM: none"),
    }
    println!("  Year mismatches: {}", catalog.mismatches().count());
    println!("  Single-sensor phones: {}", catalog.single_sensor_phones());
    match catalog.peak_launch_year() {
        Some(peak) => println!("  Peak launch year: {} ({} launches)", peak.year, peak.launches),
        None => println!("  Peak launch year: none"),
    }

    Ok(())
}
