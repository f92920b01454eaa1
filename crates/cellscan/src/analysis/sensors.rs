//! Sensor-list classification.

use crate::dataset::Dataset;

/// Split a sensor list on commas, discarding trailing empty segments.
pub fn sensor_segments(list: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = list.split(',').collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

/// Whether a sensor list names exactly one non-blank sensor.
pub fn has_single_sensor(list: &str) -> bool {
    matches!(sensor_segments(list).as_slice(), [only] if !only.trim().is_empty())
}

/// Phones listing exactly one feature sensor. Absent lists never count.
pub fn count_single_sensor_phones(dataset: &Dataset) -> usize {
    dataset
        .iter()
        .filter_map(|r| r.features_sensors.as_deref())
        .filter(|list| has_single_sensor(list))
        .count()
}
