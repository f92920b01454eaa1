//! Column identifiers and normalized value types.

mod column;
mod types;

pub use column::Column;
pub use types::{FieldValue, ValueType};
