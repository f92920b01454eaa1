//! Normalization and loading benchmarks.
//!
//! Measures per-cell cleaning cost and whole-file load time across sizes.

use cellscan::{Column, Dataset, Parser, normalize};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "oem,model,launch_announced,launch_status,body_dimensions,body_weight,body_sim,display_type,display_size,display_resolution,features_sensors,platform_os";

/// Generate a synthetic phone dataset with the specified number of rows.
fn generate_cells(rows: usize) -> String {
    let mut data = String::from(HEADER);
    data.push('\n');

    for row in 0..rows {
        let year = 2000 + row % 24;
        let line = match row % 4 {
            0 => format!(
                "OEM_{oem},Model {row},\"{year}, May\",\"Available. Released {release}, June\",150 x 70 x 8 mm,{weight} g ({oz:.2} oz),Nano-SIM,AMOLED,{size:.1} inches,1080 x 2400,\"Fingerprint, accelerometer\",\"Android {android}, One UI\"",
                oem = row % 50,
                release = year + row % 2,
                weight = 120 + row % 100,
                oz = (120 + row % 100) as f64 / 28.35,
                size = 4.0 + (row % 30) as f64 / 10.0,
                android = row % 14,
            ),
            1 => format!("OEM_{},Model {},{},Discontinued,-,-,Yes,-,-,-,V1,-", row % 50, row, year),
            2 => format!("OEM_{},Model {},Not announced,Cancelled,-,-,No,TFT,-,-,12,10", row % 50, row),
            _ => ",-,-,-,-,-,-,-,-,-,-,-".to_string(),
        };
        data.push_str(&line);
        data.push('\n');
    }

    data
}

/// Benchmark one representative cell per column.
fn bench_normalize_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_cell");

    let samples = [
        (Column::Oem, "  Samsung "),
        (Column::LaunchAnnounced, "2019, February 20"),
        (Column::LaunchStatus, "Available. Released 2019, March 08"),
        (Column::BodyWeight, "157 g (5.54 oz)"),
        (Column::BodySim, "Single SIM (Nano-SIM) or Hybrid Dual SIM"),
        (Column::DisplaySize, "6.1 inches, 93.2 cm2 (~88.3% screen-to-body ratio)"),
        (Column::FeaturesSensors, "Fingerprint (under display), accelerometer, gyro"),
        (Column::PlatformOs, "Android 9.0 (Pie), upgradable to Android 12, One UI 4.1"),
    ];

    for (column, raw) in samples {
        group.bench_with_input(BenchmarkId::new("column", column.name()), raw, |b, raw| {
            b.iter(|| black_box(normalize(Some(black_box(raw)), column)))
        });
    }

    group.finish();
}

/// Benchmark normalizing already-parsed tables of various sizes.
fn bench_build_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_dataset");

    for rows in [100, 1_000, 10_000].iter() {
        let table = Parser::new().parse_bytes(generate_cells(*rows).as_bytes()).unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(Dataset::from_table(table)))
        });
    }

    group.finish();
}

/// Benchmark loading CSV files end to end.
fn bench_load_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_file");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_cells(*rows);
        let bytes = data.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(Dataset::load(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize_cells, bench_build_dataset, bench_load_file);
criterion_main!(benches);
