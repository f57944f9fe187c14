//! Deterministic synthetic datasets.

use heatmap_common::{RawDataset, RawRecord};

use crate::fixtures::PUBLISHED_BASE_TEMPERATURE;

/// Creates a dataset covering every month of `first_year..=last_year`.
///
/// Variances follow a slow warming trend plus a seasonal wave, so the
/// temperature range is wide enough to hit every bucket:
/// `variance = trend * (year - first_year) + 1.5 * sin(month)`
///
/// # Example
///
/// ```
/// use test_utils::generate_dataset;
///
/// let raw = generate_dataset(1753, 2015, 0.005);
/// assert_eq!(raw.len(), 263 * 12);
/// ```
pub fn generate_dataset(first_year: i32, last_year: i32, trend: f64) -> RawDataset {
    let mut records = Vec::new();
    for year in first_year..=last_year {
        for month in 1..=12u32 {
            let seasonal = 1.5 * (month as f64 / 12.0 * std::f64::consts::TAU).sin();
            let variance = trend * (year - first_year) as f64 + seasonal;
            records.push(RawRecord::new(year, month, round_to(variance, 3)));
        }
    }
    RawDataset::new(PUBLISHED_BASE_TEMPERATURE, records)
}

/// Creates the same dataset as [`generate_dataset`] serialized as the
/// published JSON document.
pub fn generate_dataset_json(first_year: i32, last_year: i32, trend: f64) -> String {
    let raw = generate_dataset(first_year, last_year, trend);
    serde_json::to_string(&raw).unwrap_or_default()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
