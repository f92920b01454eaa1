//! Fuzz target for CSV parsing and record construction.
//!
//! This fuzzer tests that loading:
//! 1. Never panics on malformed input
//! 2. Produces one record per parsed row

#![no_main]

use cellscan::{Dataset, Parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(table) = Parser::new().parse_bytes(data) {
        let dataset = Dataset::from_table(&table);
        assert_eq!(dataset.len(), table.row_count());
    }
});
