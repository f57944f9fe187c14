//! Dataset to chart: map, render, optionally rasterize.

use anyhow::{Context, Result};
use grid_mapper::{HeatmapModel, TemperatureGridMapper};
use heatmap_common::{ChartLayout, HeatmapError, LegendConfig, Palette, RawDataset};
use renderer::{rasterize, render_svg, SvgOptions};
use tracing::info;

use crate::output::OutputFormat;

/// Everything needed to draw one chart.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub layout: ChartLayout,
    pub legend: LegendConfig,
    pub palette: Palette,
    pub svg: SvgOptions,
    pub format: OutputFormat,
    /// Raster scale, PNG only
    pub scale: f32,
}

/// A rendered chart and the model it was drawn from.
pub struct Chart {
    pub model: HeatmapModel,
    pub bytes: Vec<u8>,
}

pub fn render_chart(raw: &RawDataset, request: &ChartRequest) -> Result<Chart> {
    let mapper = TemperatureGridMapper::new(request.palette.len(), request.layout)?
        .with_leading_zero(request.legend.leading_zero);
    let model = mapper.map(raw).context("Failed to map dataset")?;

    let svg = render_svg(&model, &request.palette, &request.legend, &request.svg)
        .context("Failed to render SVG")?;

    let bytes = match request.format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Png => rasterize(&svg, request.scale).context("Failed to rasterize SVG")?,
    };

    let domain = &model.domain;
    info!(
        records = model.cells.len(),
        first_year = domain.min_year,
        last_year = domain.max_year,
        min_temp = domain.min_temp,
        max_temp = domain.max_temp,
        palette = %request.palette.name,
        format = request.format.extension(),
        "Rendered heatmap"
    );

    Ok(Chart { model, bytes })
}

/// Category of the library error behind `error`, if there is one.
pub fn error_category(error: &anyhow::Error) -> &'static str {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<HeatmapError>())
        .map(HeatmapError::category)
        .unwrap_or("other")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{generate_dataset, three_record_dataset, MALFORMED_JSON};

    fn request(format: OutputFormat) -> ChartRequest {
        ChartRequest {
            layout: ChartLayout::default(),
            legend: LegendConfig::default(),
            palette: Palette::reference(),
            svg: SvgOptions::default(),
            format,
            scale: 0.5,
        }
    }

    #[test]
    fn test_render_svg_chart() {
        let chart = render_chart(&three_record_dataset(), &request(OutputFormat::Svg)).unwrap();
        let svg = String::from_utf8(chart.bytes).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches(r#"class="cell""#).count(), 3);
        assert_eq!(chart.model.domain.min_temp, 7.5);
    }

    #[test]
    fn test_render_png_chart() {
        let raw = generate_dataset(1900, 1910, 0.02);
        let chart = render_chart(&raw, &request(OutputFormat::Png)).unwrap();
        assert_eq!(&chart.bytes[1..4], b"PNG");
        assert_eq!(chart.model.cells.len(), 11 * 12);
    }

    #[test]
    fn test_malformed_dataset_category() {
        let err = RawDataset::from_json(MALFORMED_JSON)
            .map_err(anyhow::Error::from)
            .unwrap_err();
        assert_eq!(error_category(&err), "data");
    }

    #[test]
    fn test_empty_dataset_category() {
        let raw = RawDataset {
            base_temperature: 8.66,
            monthly_variance: Vec::new(),
        };
        let err = render_chart(&raw, &request(OutputFormat::Svg)).err().unwrap();
        assert_eq!(error_category(&err), "data");
        assert_eq!(error_category(&anyhow::anyhow!("plain")), "other");
    }
}
