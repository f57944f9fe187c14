//! Normalization of the published dataset.

use heatmap_common::{Dataset, HeatmapError, HeatmapResult, RawDataset, TemperatureRecord};
use tracing::debug;

/// Rebase months to zero-based and compute absolute temperatures.
///
/// Only accepts the published (one-based) form, so an already normalized
/// [`Dataset`] cannot be shifted a second time. Use [`Dataset::to_raw`] to
/// get back to the published form.
pub fn normalize(raw: &RawDataset) -> HeatmapResult<Dataset> {
    if raw.is_empty() {
        return Err(HeatmapError::EmptyDataset);
    }

    let base = raw.base_temperature;
    if !base.is_finite() {
        return Err(HeatmapError::ParseError(format!(
            "base temperature {} is not finite",
            base
        )));
    }

    let records = raw
        .monthly_variance
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .validate()
                .map_err(|reason| HeatmapError::MalformedRecord { index, reason })?;

            Ok(TemperatureRecord {
                year: record.year,
                month: record.month - 1,
                variance: record.variance,
                temperature: base + record.variance,
            })
        })
        .collect::<HeatmapResult<Vec<_>>>()?;

    debug!(records = records.len(), base_temperature = base, "Normalized dataset");

    Ok(Dataset {
        base_temperature: base,
        records,
    })
}
