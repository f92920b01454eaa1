//! Per-column cleaning rules.
//!
//! Every function is total: any input, including a missing cell, maps to
//! either a typed value or `None`. Pattern scans take the first match only.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

/// A standalone four-digit token.
static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([0-9]{4})\b").unwrap());

/// A number followed by the gram unit, e.g. `150 g` or `133.5g (4.7 oz)`.
static GRAMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*g").unwrap());

/// A number followed by `inches`, e.g. `6.5 inches, 102.0 cm2`.
static INCHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*inches").unwrap());

/// An entire value that is an integer or decimal.
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").unwrap());

/// Launch states kept verbatim instead of reduced to a year.
const TERMINAL_STATUSES: [&str; 2] = ["Discontinued", "Cancelled"];

/// SIM answers that carry no description of the SIM.
const BARE_SIM_ANSWERS: [&str; 2] = ["No", "Yes"];

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Check if a value is a spreadsheet placeholder for "no data".
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == "-"
}

/// Trimmed content of a cell, or `None` for missing and placeholder cells.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !is_placeholder(v))
}

/// Check if the trimmed value is purely an integer or decimal.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value.trim())
}

/// The first standalone four-digit token in `text`.
pub fn first_year_token(text: &str) -> Option<&str> {
    YEAR_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn first_measure(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

// =============================================================================
// COLUMN RULES
// =============================================================================

/// Free-text columns: oem, model, body_dimensions, display_type, display_resolution.
pub fn text(raw: Option<&str>) -> Option<String> {
    present(raw).map(str::to_string)
}

/// First four-digit token as an integer year. No plausibility check.
pub fn announced_year(raw: Option<&str>) -> Option<i32> {
    raw.and_then(first_year_token).and_then(|y| y.parse().ok())
}

/// Terminal status verbatim, otherwise the first four-digit token kept as text.
pub fn launch_status(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if TERMINAL_STATUSES.contains(&trimmed) {
        return Some(trimmed.to_string());
    }
    first_year_token(raw).map(str::to_string)
}

/// Grams from the first `<number> g` in the cell.
pub fn body_weight(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| first_measure(&GRAMS, v))
}

/// SIM description; bare yes/no answers are dropped.
pub fn body_sim(raw: Option<&str>) -> Option<String> {
    present(raw)
        .filter(|v| !BARE_SIM_ANSWERS.contains(v))
        .map(str::to_string)
}

/// Inches from the first `<number> inches` in the cell.
pub fn display_size(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| first_measure(&INCHES, v))
}

/// Sensor list; a bare number is not a sensor.
pub fn features_sensors(raw: Option<&str>) -> Option<String> {
    present(raw)
        .filter(|v| !is_numeric(v))
        .map(str::to_string)
}

/// Operating system name: everything before the first comma.
pub fn platform_os(raw: Option<&str>) -> Option<String> {
    let value = raw?;
    if is_numeric(value) {
        return None;
    }
    let head = value.split(',').next().unwrap_or_default();
    present(Some(head)).map(str::to_string)
}
