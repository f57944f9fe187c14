//! Legend layout: one swatch per palette colour, one rotated label per tick.
//!
//! Coordinates are in the legend's own space (`LegendConfig::width` wide),
//! the SVG writer scales and positions the whole block under the chart.

use grid_mapper::HeatmapModel;
use heatmap_common::{HeatmapError, HeatmapResult, LegendConfig, Palette};

/// Label rotation, degrees clockwise.
pub const LABEL_ROTATION: f64 = 35.0;

/// Vertical gap between the intro text and the swatches.
const SWATCH_OFFSET: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// `#RRGGBB`
    pub fill: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub width: f64,
    pub height: f64,
    /// Position of the "Legend:" text
    pub intro: (f64, f64),
    pub swatches: Vec<Swatch>,
    pub labels: Vec<Label>,
}

/// Lay out the legend for a mapped model.
///
/// Fails with `InvalidPalette` when the palette has fewer colours than the
/// model has buckets.
pub fn layout_legend(
    model: &HeatmapModel,
    palette: &Palette,
    config: &LegendConfig,
) -> HeatmapResult<LegendLayout> {
    if palette.len() < model.palette_size {
        return Err(HeatmapError::InvalidPalette(format!(
            "{} has {} colors, model needs {}",
            palette.name,
            palette.len(),
            model.palette_size
        )));
    }

    let cell = config.cell_width(model.palette_size);
    let pad = config.padding;

    let swatches = palette
        .colors
        .iter()
        .take(model.palette_size)
        .enumerate()
        .map(|(i, color)| Swatch {
            x: pad + i as f64 * cell,
            y: SWATCH_OFFSET + pad,
            size: cell,
            fill: color.to_hex(),
            opacity: color.opacity(),
        })
        .collect();

    let label_y = config.height + 4.0;
    let labels = model
        .legend
        .iter()
        .enumerate()
        .map(|(i, tick)| Label {
            x: pad + i as f64 * cell,
            y: label_y,
            text: tick.label.clone(),
        })
        .collect();

    Ok(LegendLayout {
        width: config.width,
        height: config.height + pad,
        intro: (pad, pad),
        swatches,
        labels,
    })
}
