//! Extrema and distinct-value counts over a set of records.

use std::collections::HashSet;

use heatmap_common::{HeatmapError, HeatmapResult, TemperatureRecord};
use serde::Serialize;

/// Bounds of a normalized dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub min_temp: f64,
    pub max_temp: f64,
    pub min_year: i32,
    pub max_year: i32,
    pub min_month: u32,
    pub max_month: u32,
    pub distinct_months: usize,
    pub distinct_years: usize,
}

impl Domain {
    /// `max_temp - min_temp`, zero when every temperature is equal.
    pub fn temperature_span(&self) -> f64 {
        self.max_temp - self.min_temp
    }
}

/// Scan the records once, collecting extrema and distinct years/months.
pub fn compute_domain(records: &[TemperatureRecord]) -> HeatmapResult<Domain> {
    let first = records.first().ok_or(HeatmapError::EmptyDataset)?;

    let mut domain = Domain {
        min_temp: first.temperature,
        max_temp: first.temperature,
        min_year: first.year,
        max_year: first.year,
        min_month: first.month,
        max_month: first.month,
        distinct_months: 0,
        distinct_years: 0,
    };
    let mut years = HashSet::new();
    let mut months = HashSet::new();

    for record in records {
        domain.min_temp = domain.min_temp.min(record.temperature);
        domain.max_temp = domain.max_temp.max(record.temperature);
        domain.min_year = domain.min_year.min(record.year);
        domain.max_year = domain.max_year.max(record.year);
        domain.min_month = domain.min_month.min(record.month);
        domain.max_month = domain.max_month.max(record.month);
        years.insert(record.year);
        months.insert(record.month);
    }

    domain.distinct_years = years.len();
    domain.distinct_months = months.len();
    Ok(domain)
}
