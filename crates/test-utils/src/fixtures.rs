//! Hand-written datasets with known expected results.

use heatmap_common::{RawDataset, RawRecord};

/// Base temperature of the published global land-surface dataset.
pub const PUBLISHED_BASE_TEMPERATURE: f64 = 8.66;

/// Three records spanning a century, base 8.0.
///
/// Expected temperatures after normalization: 7.5, 8.0, 9.5.
pub fn three_record_dataset() -> RawDataset {
    RawDataset::new(
        8.0,
        vec![
            RawRecord::new(1900, 1, -0.5),
            RawRecord::new(1950, 6, 0.0),
            RawRecord::new(2000, 12, 1.5),
        ],
    )
}

/// `count` records with zero variance, so every temperature equals the base.
pub fn uniform_dataset(count: usize) -> RawDataset {
    let records = (0..count)
        .map(|i| RawRecord::new(1900 + (i / 12) as i32, (i % 12) as u32 + 1, 0.0))
        .collect();
    RawDataset::new(PUBLISHED_BASE_TEMPERATURE, records)
}

/// One full year in the published JSON shape (first year of the real data).
pub const SAMPLE_YEAR_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    {"year": 1753, "month": 1, "variance": -1.366},
    {"year": 1753, "month": 2, "variance": -2.223},
    {"year": 1753, "month": 3, "variance": 0.211},
    {"year": 1753, "month": 4, "variance": -0.843},
    {"year": 1753, "month": 5, "variance": -0.771},
    {"year": 1753, "month": 6, "variance": -0.485},
    {"year": 1753, "month": 7, "variance": -0.513},
    {"year": 1753, "month": 8, "variance": -0.787},
    {"year": 1753, "month": 9, "variance": -0.642},
    {"year": 1753, "month": 10, "variance": -0.561},
    {"year": 1753, "month": 11, "variance": -0.871},
    {"year": 1753, "month": 12, "variance": -1.163}
  ]
}"#;

/// A document whose second record lacks `variance`.
pub const MALFORMED_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    {"year": 1753, "month": 1, "variance": -1.366},
    {"year": 1753, "month": 2}
  ]
}"#;

/// A well-formed document with no records.
pub const EMPTY_JSON: &str = r#"{"baseTemperature": 8.66, "monthlyVariance": []}"#;
