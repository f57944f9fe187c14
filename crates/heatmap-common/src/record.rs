//! Temperature dataset types.
//!
//! Two forms of the same data exist:
//! - [`RawDataset`]: the published JSON, months numbered 1-12.
//! - [`Dataset`]: normalized, months numbered 0-11 and absolute
//!   temperatures precomputed from the base temperature.
//!
//! Normalization itself lives in the `grid-mapper` crate.

use chrono::Month;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HeatmapError, HeatmapResult};

/// One monthly observation as published (month is one-based).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    pub month: u32,
    /// Deviation from the base temperature, degrees Celsius
    pub variance: f64,
}

impl RawRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// Check the value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err(format!("month {} outside 1-12", self.month));
        }
        if !self.variance.is_finite() {
            return Err(format!("variance {} is not finite", self.variance));
        }
        Ok(())
    }
}

/// The source dataset exactly as published.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawRecord>,
}

/// Wire shape used while parsing, so a bad record can be reported by index.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDatasetRepr {
    base_temperature: f64,
    monthly_variance: Vec<Value>,
}

impl RawDataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<RawRecord>) -> Self {
        Self {
            base_temperature,
            monthly_variance,
        }
    }

    /// Parse the published JSON document.
    ///
    /// Fails with `ParseError` when the top level is not the expected object,
    /// and with `MalformedRecord` when a single entry of `monthlyVariance`
    /// is missing a field or carries a non-numeric value.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        let repr: RawDatasetRepr = serde_json::from_str(json)?;
        Self::from_repr(repr)
    }

    fn from_repr(repr: RawDatasetRepr) -> HeatmapResult<Self> {
        let monthly_variance = repr
            .monthly_variance
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<RawRecord>(value).map_err(|e| {
                    HeatmapError::MalformedRecord {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<HeatmapResult<Vec<_>>>()?;

        Ok(Self {
            base_temperature: repr.base_temperature,
            monthly_variance,
        })
    }

    pub fn to_json(&self) -> HeatmapResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }
}

/// A normalized observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    /// Zero-based month (0 = January)
    pub month: u32,
    pub variance: f64,
    /// `base_temperature + variance`
    pub temperature: f64,
}

/// A normalized dataset, ready for the mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub base_temperature: f64,
    pub records: Vec<TemperatureRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert back to the published form (one-based months, no
    /// derived temperature).
    pub fn to_raw(&self) -> RawDataset {
        RawDataset {
            base_temperature: self.base_temperature,
            monthly_variance: self
                .records
                .iter()
                .map(|r| RawRecord::new(r.year, r.month + 1, r.variance))
                .collect(),
        }
    }
}

/// English name of a zero-based month index.
pub fn month_name(month: u32) -> Option<&'static str> {
    let one_based = u8::try_from(month.checked_add(1)?).ok()?;
    Month::try_from(one_based).ok().map(|m| m.name())
}
