//! Fuzz target for row deletion and OEM search.
//!
//! Both operations must either fail cleanly or leave a parseable file behind.

#![no_main]

use cellscan::Parser;
use cellscan::mutation::{delete_rows_by_model, search_by_oem};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&[u8], &str)| {
    let (data, needle) = input;
    if data.len() > 10_000 {
        return;
    }

    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let source = dir.path().join("cells.csv");
    if std::fs::write(&source, data).is_err() {
        return;
    }

    let _ = search_by_oem(&source, needle, dir.path().join("search_results.txt"));

    if let Ok(outcome) = delete_rows_by_model(&source, needle) {
        if outcome.removed > 0 {
            let rewritten = std::fs::read(&source).unwrap();
            assert!(Parser::new().parse_bytes(&rewritten).is_ok());
        }
    }
});
