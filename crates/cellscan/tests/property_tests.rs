//! Property-based tests for cellscan normalization and queries.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: cleaning rules never crash on any input
//! 2. **Determinism**: Same input always produces same output
//! 3. **Invariants**: no present text is blank or a placeholder
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p cellscan --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p cellscan --test property_tests
//! ```

use proptest::prelude::*;

use cellscan::analysis::{
    average_weight_by_oem, count_single_sensor_phones, highest_average_weight, peak_launch_year,
};
use cellscan::normalize::{self, is_placeholder};
use cellscan::{Column, Dataset, FieldValue, Parser, Record, normalize_named};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate arbitrary ASCII strings (common case)
fn ascii_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_,\\-\\.\\s]{0,60}"
}

/// Generate strings that look like spreadsheet cells
fn cell_like() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("-".to_string()),
        Just(" - ".to_string()),
        Just("Yes".to_string()),
        Just("No".to_string()),
        Just("Discontinued".to_string()),
        Just("Cancelled".to_string()),
        "[0-9]{1,4}(\\.[0-9]{1,2})?",
        "[0-9]{1,3}(\\.[0-9])? ?g \\([0-9]\\.[0-9]{2} oz\\)",
        "[0-9]\\.[0-9] inches, [0-9]{2}\\.[0-9] cm2",
        "(Available\\. Released |Announced )?(19|20)[0-9]{2}, (January|May|Q[1-4])",
        "[A-Z][a-z]{2,10}( [0-9]{1,2}(\\.[0-9])?)?(, [A-Za-z ]{1,15})?",
    ]
}

/// Generate completely random strings (edge cases)
fn random_utf8() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..200)
        .prop_filter_map("valid UTF-8", |bytes| String::from_utf8(bytes).ok())
}

fn any_column() -> impl Strategy<Value = Column> {
    prop::sample::select(Column::ALL.to_vec())
}

fn any_cell() -> impl Strategy<Value = String> {
    prop_oneof![cell_like(), ascii_string(), random_utf8()]
}

/// A full twelve-cell row.
fn row() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(cell_like(), Column::ALL.len())
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(row(), 0..40).prop_map(|rows| {
        rows.iter()
            .map(|cells| {
                let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
                Record::from_row(&cells)
            })
            .collect()
    })
}

// =============================================================================
// Normalizer Properties
// =============================================================================

mod normalizer_tests {
    use super::*;

    proptest! {
        /// Normalization never panics and never yields blank or dash text.
        #[test]
        fn text_is_never_blank_or_dash(raw in any_cell(), column in any_column()) {
            if let Some(FieldValue::Text(text)) = normalize::normalize(Some(&raw), column) {
                prop_assert!(!is_placeholder(&text), "{} produced {:?} from {:?}", column, text, raw);
                prop_assert_eq!(text.trim(), text.as_str());
            }
        }

        /// Output type always matches the column's declared type.
        #[test]
        fn value_type_matches_column(raw in any_cell(), column in any_column()) {
            if let Some(value) = normalize::normalize(Some(&raw), column) {
                prop_assert_eq!(value.value_type(), column.value_type());
            }
        }

        /// Normalization is deterministic.
        #[test]
        fn normalization_is_deterministic(raw in any_cell(), column in any_column()) {
            prop_assert_eq!(
                normalize::normalize(Some(&raw), column),
                normalize::normalize(Some(&raw), column)
            );
        }

        /// Named lookup agrees with the enum for every known header.
        #[test]
        fn named_lookup_matches_enum(raw in cell_like(), column in any_column()) {
            prop_assert_eq!(
                normalize_named(Some(&raw), column.name()),
                normalize::normalize(Some(&raw), column)
            );
        }

        /// Unknown headers pass the raw value through.
        #[test]
        fn unknown_header_is_passthrough(raw in ascii_string()) {
            prop_assert_eq!(
                normalize_named(Some(&raw), "network_technology"),
                Some(FieldValue::Text(raw.clone()))
            );
        }

        /// Free text is the trimmed input whenever it is not a placeholder.
        #[test]
        fn free_text_keeps_content(raw in ascii_string()) {
            let expected = if is_placeholder(&raw) { None } else { Some(raw.trim().to_string()) };
            prop_assert_eq!(normalize::text(Some(&raw)), expected);
        }

        /// A gram weight is read back as the same number.
        #[test]
        fn grams_are_extracted(whole in 1u32..2000, tenth in 0u32..10, space in prop::bool::ANY) {
            let raw = format!("{}.{}{}g (x oz)", whole, tenth, if space { " " } else { "" });
            let expected: f64 = format!("{}.{}", whole, tenth).parse().unwrap();
            prop_assert_eq!(normalize::body_weight(Some(&raw)), Some(expected));
        }

        /// A display size is read back as the same number.
        #[test]
        fn inches_are_extracted(whole in 1u32..20, tenth in 0u32..10) {
            let raw = format!("{}.{} inches, 90.2 cm2", whole, tenth);
            let expected: f64 = format!("{}.{}", whole, tenth).parse().unwrap();
            prop_assert_eq!(normalize::display_size(Some(&raw)), Some(expected));
        }

        /// The first standalone year wins.
        #[test]
        fn first_year_is_announced(prefix in "[A-Za-z ]{0,20}", first in 1000i32..10000, second in 1000i32..10000) {
            let raw = format!("{} {}, updated {}", prefix, first, second);
            prop_assert_eq!(normalize::announced_year(Some(&raw)), Some(first));
            prop_assert_eq!(normalize::launch_status(Some(&raw)), Some(first.to_string()));
        }

        /// Platform names never keep anything after a comma.
        #[test]
        fn platform_has_no_comma(raw in any_cell()) {
            if let Some(os) = normalize::platform_os(Some(&raw)) {
                prop_assert!(!os.contains(','));
            }
        }

        /// Bare numbers are neither sensors nor platforms.
        #[test]
        fn numbers_are_not_features(whole in 0u32..100_000, fraction in prop::option::of(0u32..100)) {
            let raw = match fraction {
                Some(f) => format!(" {}.{} ", whole, f),
                None => whole.to_string(),
            };
            prop_assert_eq!(normalize::features_sensors(Some(&raw)), None);
            prop_assert_eq!(normalize::platform_os(Some(&raw)), None);
        }
    }
}

// =============================================================================
// Query Properties
// =============================================================================

mod query_tests {
    use super::*;

    proptest! {
        /// Single-sensor phones are a subset of the dataset.
        #[test]
        fn single_sensor_count_is_bounded(data in dataset()) {
            prop_assert!(count_single_sensor_phones(&data) <= data.len());
        }

        /// The weight leader has the largest average of any OEM.
        #[test]
        fn weight_leader_is_maximal(data in dataset()) {
            let averages = average_weight_by_oem(&data);
            match highest_average_weight(&data) {
                Some(leader) => {
                    for (oem, (average, _)) in &averages {
                        prop_assert!(
                            *average <= leader.average_grams,
                            "{} averages {} above leader {}", oem, average, leader.average_grams
                        );
                    }
                }
                None => prop_assert!(averages.is_empty()),
            }
        }

        /// The peak year is modern and counts only its own launches.
        #[test]
        fn peak_year_is_modern(data in dataset()) {
            if let Some(peak) = peak_launch_year(&data) {
                prop_assert!((2000..=2099).contains(&peak.year));
                let launches = data
                    .iter()
                    .filter(|r| r.launch_announced == Some(peak.year))
                    .count();
                prop_assert_eq!(launches, peak.launches);
            }
        }
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

mod parser_tests {
    use super::*;

    proptest! {
        /// Parsing never panics on arbitrary bytes.
        #[test]
        fn parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..500)) {
            let _ = Parser::new().parse_bytes(&bytes);
        }

        /// Every parsed row becomes exactly one record.
        #[test]
        fn one_record_per_row(rows in prop::collection::vec(row(), 0..20)) {
            let mut csv = Column::ALL.map(|c| c.name()).join(",");
            csv.push('\n');
            for cells in &rows {
                let quoted: Vec<String> = cells
                    .iter()
                    .map(|c| format!("\"{}\"", c.replace('"', "\"\"")))
                    .collect();
                csv.push_str(&quoted.join(","));
                csv.push('\n');
            }

            let table = Parser::new().parse_bytes(csv.as_bytes()).unwrap();
            prop_assert_eq!(Dataset::from_table(&table).len(), rows.len());
        }
    }
}
