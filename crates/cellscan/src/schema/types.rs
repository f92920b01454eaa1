//! Normalized value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type carried by a normalized column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Free text.
    Text,
    /// Four-digit calendar year.
    Year,
    /// Floating-point measurement (grams, inches).
    Float,
}

/// A present, normalized cell value.
///
/// Absence is expressed by wrapping this in `Option`, never by an empty variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Year(i32),
    Float(f64),
}

impl FieldValue {
    /// The type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            FieldValue::Text(_) => ValueType::Text,
            FieldValue::Year(_) => ValueType::Year,
            FieldValue::Float(_) => ValueType::Float,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_year(&self) -> Option<i32> {
        match self {
            FieldValue::Year(y) => Some(*y),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Year(y) => write!(f, "{}", y),
            FieldValue::Float(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Year(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}
