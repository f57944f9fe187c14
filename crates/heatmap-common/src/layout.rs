//! Chart and legend dimensions.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Outer dimensions of the heatmap drawing area, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Space reserved on every side for axes
    #[serde(default = "default_padding")]
    pub padding: f64,
}

fn default_width() -> f64 {
    900.0
}
fn default_height() -> f64 {
    600.0
}
fn default_padding() -> f64 {
    60.0
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
        }
    }
}

impl ChartLayout {
    pub fn validate(&self) -> HeatmapResult<()> {
        let values = [self.width, self.height, self.padding];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(HeatmapError::InvalidLayout(format!(
                "dimensions must be finite and non-negative: {:?}",
                self
            )));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(HeatmapError::InvalidLayout(format!(
                "padding {} leaves no room in a {}x{} chart",
                self.padding, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Width available to the cell grid.
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height available to the cell grid.
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Pixel interval the year axis maps onto.
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding, self.width - self.padding)
    }

    /// Pixel interval the month axis maps onto.
    pub fn y_range(&self) -> (f64, f64) {
        (self.padding, self.height - self.padding)
    }
}

/// Legend strip drawn below the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default = "default_legend_width")]
    pub width: f64,

    #[serde(default = "default_legend_height")]
    pub height: f64,

    #[serde(default = "default_legend_padding")]
    pub padding: f64,

    /// Prepend a synthetic `0` tick ahead of the segment boundaries, as
    /// the published chart does.
    #[serde(default)]
    pub leading_zero: bool,
}

fn default_legend_width() -> f64 {
    200.0
}
fn default_legend_height() -> f64 {
    40.0
}
fn default_legend_padding() -> f64 {
    10.0
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: default_legend_width(),
            height: default_legend_height(),
            padding: default_legend_padding(),
            leading_zero: false,
        }
    }
}

impl LegendConfig {
    pub fn validate(&self) -> HeatmapResult<()> {
        let values = [self.width, self.height, self.padding];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(HeatmapError::InvalidLayout(format!(
                "legend dimensions must be finite and non-negative: {:?}",
                self
            )));
        }
        if self.width - 2.0 * self.padding <= 0.0 {
            return Err(HeatmapError::InvalidLayout(format!(
                "legend padding {} leaves no room in width {}",
                self.padding, self.width
            )));
        }
        Ok(())
    }

    /// Side length of one colour swatch when `slots` swatches share the
    /// legend width.
    pub fn cell_width(&self, slots: usize) -> f64 {
        if slots == 0 {
            return 0.0;
        }
        (self.width - 2.0 * self.padding) / slots as f64
    }
}
