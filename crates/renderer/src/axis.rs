//! Axis tick placement and labels.

use grid_mapper::HeatmapModel;
use heatmap_common::month_name;

/// A labelled tick, `position` in chart coordinates along its axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Round-numbered year ticks along the x axis.
///
/// Short spans give fractional steps; only whole years are kept.
pub fn year_ticks(model: &HeatmapModel, count: usize) -> Vec<AxisTick> {
    model
        .x_scale
        .ticks(count)
        .into_iter()
        .filter(|year| year.fract() == 0.0)
        .map(|year| AxisTick {
            position: model.x_scale.apply(year),
            label: format!("{}", year.round() as i64),
        })
        .collect()
}

/// One tick per observed month along the y axis, centred on its row.
pub fn month_ticks(model: &HeatmapModel) -> Vec<AxisTick> {
    model
        .months()
        .into_iter()
        .map(|month| AxisTick {
            position: model.y_scale.apply(month as f64),
            label: month_name(month)
                .map(str::to_string)
                .unwrap_or_else(|| month.to_string()),
        })
        .collect()
}
