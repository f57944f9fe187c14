//! The complete mapping pipeline, from published dataset to drawable model.

use std::collections::BTreeSet;

use heatmap_common::{
    ChartLayout, Dataset, HeatmapError, HeatmapResult, RawDataset, TemperatureRecord,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::bucket::{bucket_color, segment_boundaries, segment_width};
use crate::domain::{compute_domain, Domain};
use crate::legend::{legend_ticks, legend_ticks_leading_zero, LegendTick};
use crate::normalize::normalize;
use crate::scale::{make_linear_scale, LinearScale};

/// One positioned, coloured heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    pub record: TemperatureRecord,
    /// Palette index
    pub bucket: usize,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
}

/// Everything a renderer needs, derived once from a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapModel {
    pub dataset: Dataset,
    pub domain: Domain,
    pub layout: ChartLayout,
    pub palette_size: usize,
    /// Year to horizontal position
    pub x_scale: LinearScale,
    /// Zero-based month to vertical position (cell centre)
    pub y_scale: LinearScale,
    pub cell_width: f64,
    pub cell_height: f64,
    pub cells: Vec<Cell>,
    /// Lower bound of each bucket
    pub segments: Vec<f64>,
    pub legend: Vec<LegendTick>,
}

impl HeatmapModel {
    /// Observed zero-based months in ascending order.
    pub fn months(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|c| c.record.month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of cells assigned to each bucket.
    pub fn bucket_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette_size];
        for cell in &self.cells {
            if let Some(count) = counts.get_mut(cell.bucket) {
                *count += 1;
            }
        }
        counts
    }
}

/// Stateless mapper configured with a palette size and chart layout.
#[derive(Debug, Clone)]
pub struct TemperatureGridMapper {
    palette_size: usize,
    layout: ChartLayout,
    leading_zero: bool,
}

impl TemperatureGridMapper {
    /// Fails with `InvalidPalette` for a zero palette size and
    /// `InvalidLayout` when the layout leaves no drawable area.
    pub fn new(palette_size: usize, layout: ChartLayout) -> HeatmapResult<Self> {
        if palette_size == 0 {
            return Err(HeatmapError::InvalidPalette(
                "palette size must be at least 1".to_string(),
            ));
        }
        layout.validate()?;

        Ok(Self {
            palette_size,
            layout,
            leading_zero: false,
        })
    }

    /// Use the published legend layout (synthetic leading `0` tick).
    pub fn with_leading_zero(mut self, leading_zero: bool) -> Self {
        self.leading_zero = leading_zero;
        self
    }

    /// Normalize the published dataset and map it.
    pub fn map(&self, raw: &RawDataset) -> HeatmapResult<HeatmapModel> {
        let dataset = normalize(raw)?;
        self.map_dataset(dataset)
    }

    /// Map an already normalized dataset.
    pub fn map_dataset(&self, dataset: Dataset) -> HeatmapResult<HeatmapModel> {
        let domain = compute_domain(&dataset.records)?;
        let n = self.palette_size;
        debug!(
            records = dataset.len(),
            min_temp = domain.min_temp,
            max_temp = domain.max_temp,
            years = domain.distinct_years,
            months = domain.distinct_months,
            segment = segment_width(domain.min_temp, domain.max_temp, n),
            "Computed dataset domain"
        );

        let (x0, x1) = self.layout.x_range();
        let (y0, y1) = self.layout.y_range();
        let x_scale = make_linear_scale(domain.min_year as f64, domain.max_year as f64, x0, x1);
        let y_scale = make_linear_scale(domain.min_month as f64, domain.max_month as f64, y0, y1);

        let cell_width = self.layout.plot_width() / domain.distinct_years as f64;
        let cell_height = self.layout.plot_height() / domain.distinct_months as f64;

        let cells = dataset
            .records
            .iter()
            .map(|record| Cell {
                record: *record,
                bucket: bucket_color(record.temperature, domain.min_temp, domain.max_temp, n),
                x: x_scale.apply(record.year as f64),
                y: y_scale.apply(record.month as f64) - cell_height / 2.0,
            })
            .collect();

        let legend = if self.leading_zero {
            legend_ticks_leading_zero(domain.min_temp, domain.max_temp, n)
        } else {
            legend_ticks(domain.min_temp, domain.max_temp, n)
        };

        info!(
            cells = dataset.len(),
            palette_size = n,
            "Mapped temperature grid"
        );

        Ok(HeatmapModel {
            segments: segment_boundaries(domain.min_temp, domain.max_temp, n),
            dataset,
            domain,
            layout: self.layout,
            palette_size: n,
            x_scale,
            y_scale,
            cell_width,
            cell_height,
            cells,
            legend,
        })
    }
}
