//! SVG document generation.
//!
//! Document structure, top to bottom:
//! - header band with title and description
//! - `<g id="chart">`: one `rect.cell` per record, x and y axes
//! - `<g id="legend">`: swatches and rotated tick labels, scaled up

use std::fmt::Write;

use grid_mapper::{round_temperature, HeatmapModel};
use heatmap_common::{month_name, Color, HeatmapError, HeatmapResult, LegendConfig, Palette};
use tracing::debug;

use crate::axis::{month_ticks, year_ticks, AxisTick};
use crate::legend::{layout_legend, LegendLayout, LABEL_ROTATION};

/// Height of the title band above the chart.
const HEADER_HEIGHT: f64 = 60.0;

/// Tick mark length, and gap between tick and label.
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Presentation options that are not part of the data mapping.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Defaults to "Monthly Global Land-Surface Temperature <first>-<last>"
    pub title: Option<String>,
    /// Defaults to "(base temperature <base>° Celsius)"
    pub description: Option<String>,
    /// Approximate number of year ticks
    pub year_ticks: usize,
    /// Scale factor applied to the legend block
    pub legend_scale: f64,
    pub background: Color,
    pub font_family: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            year_ticks: 10,
            legend_scale: 2.0,
            background: Color::rgb(255, 255, 255),
            font_family: "sans-serif".to_string(),
        }
    }
}

/// Render a mapped model to an SVG document.
pub fn render_svg(
    model: &HeatmapModel,
    palette: &Palette,
    legend: &LegendConfig,
    options: &SvgOptions,
) -> HeatmapResult<String> {
    palette.validate()?;
    legend.validate()?;
    let legend_layout = layout_legend(model, palette, legend)?;

    let layout = &model.layout;
    let legend_height = legend_layout.height * options.legend_scale;
    let width = layout.width;
    let height = HEADER_HEIGHT + layout.height + legend_height + layout.padding / 2.0;

    let mut svg = String::with_capacity(model.cells.len() * 256 + 8192);
    write_document(&mut svg, model, palette, &legend_layout, options, width, height)
        .map_err(|e| HeatmapError::RenderError(format!("SVG formatting failed: {}", e)))?;

    debug!(
        cells = model.cells.len(),
        bytes = svg.len(),
        "Rendered SVG document"
    );
    Ok(svg)
}

fn write_document(
    svg: &mut String,
    model: &HeatmapModel,
    palette: &Palette,
    legend: &LegendLayout,
    options: &SvgOptions,
    width: f64,
    height: f64,
) -> std::fmt::Result {
    let layout = &model.layout;

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="chart-content" preserveAspectRatio="xMinYMin meet" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{font}">"#,
        w = num(width),
        h = num(height),
        font = escape(&options.font_family),
    )?;
    writeln!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        options.background.to_hex()
    )?;

    let title = options.title.clone().unwrap_or_else(|| {
        format!(
            "Monthly Global Land-Surface Temperature {}-{}",
            model.domain.min_year, model.domain.max_year
        )
    });
    let description = options.description.clone().unwrap_or_else(|| {
        format!(
            "(base temperature {}° Celsius)",
            model.dataset.base_temperature
        )
    });
    writeln!(
        svg,
        r#"<text id="title" x="{}" y="26" text-anchor="middle" font-size="20" font-weight="bold">{}</text>"#,
        num(width / 2.0),
        escape(&title)
    )?;
    writeln!(
        svg,
        r#"<text id="description" x="{}" y="48" text-anchor="middle" font-size="13">{}</text>"#,
        num(width / 2.0),
        escape(&description)
    )?;

    writeln!(
        svg,
        r#"<g id="chart" transform="translate(0,{})">"#,
        num(HEADER_HEIGHT)
    )?;
    write_cells(svg, model, palette)?;
    write_x_axis(
        svg,
        &year_ticks(model, options.year_ticks),
        model.x_scale.range(),
        layout.height - layout.padding + model.cell_height / 2.0,
    )?;
    write_y_axis(svg, &month_ticks(model), model.y_scale.range(), layout.padding)?;
    writeln!(svg, "</g>")?;

    write_legend(
        svg,
        legend,
        layout.padding,
        HEADER_HEIGHT + layout.height,
        options.legend_scale,
    )?;

    writeln!(svg, "</svg>")
}

fn write_cells(svg: &mut String, model: &HeatmapModel, palette: &Palette) -> std::fmt::Result {
    let fills: Vec<String> = palette.colors.iter().map(Color::to_hex).collect();
    let width = num(model.cell_width);
    let height = num(model.cell_height);

    writeln!(svg, r#"<g id="cells">"#)?;
    for cell in &model.cells {
        let r = &cell.record;
        let month = month_name(r.month).unwrap_or("?");
        let fill = fills.get(cell.bucket).map(String::as_str).unwrap_or("#000000");
        writeln!(
            svg,
            r#"<rect class="cell" data-month="{}" data-year="{}" data-temp="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"><title>{} {}&#10;Temp: {}°&#10;Variance: {}°</title></rect>"#,
            r.month,
            r.year,
            r.temperature,
            num(cell.x),
            num(cell.y),
            width,
            height,
            fill,
            month,
            r.year,
            round_temperature(r.temperature),
            r.variance,
        )?;
    }
    writeln!(svg, "</g>")
}

fn write_x_axis(
    svg: &mut String,
    ticks: &[AxisTick],
    range: (f64, f64),
    offset_y: f64,
) -> std::fmt::Result {
    writeln!(
        svg,
        r#"<g id="x-axis" transform="translate(0,{})" font-size="10" text-anchor="middle">"#,
        num(offset_y)
    )?;
    writeln!(
        svg,
        r#"<path class="domain" stroke="currentColor" fill="none" d="M{},{}V0H{}V{}"/>"#,
        num(range.0),
        num(TICK_SIZE),
        num(range.1),
        num(TICK_SIZE)
    )?;
    for tick in ticks {
        writeln!(
            svg,
            r#"<g class="tick" transform="translate({},0)"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
            num(tick.position),
            num(TICK_SIZE),
            num(TICK_SIZE + TICK_PADDING),
            escape(&tick.label)
        )?;
    }
    writeln!(svg, "</g>")
}

fn write_y_axis(
    svg: &mut String,
    ticks: &[AxisTick],
    range: (f64, f64),
    offset_x: f64,
) -> std::fmt::Result {
    writeln!(
        svg,
        r#"<g id="y-axis" transform="translate({},0)" font-size="10" text-anchor="end">"#,
        num(offset_x)
    )?;
    writeln!(
        svg,
        r#"<path class="domain" stroke="currentColor" fill="none" d="M-{},{}H0V{}H-{}"/>"#,
        num(TICK_SIZE),
        num(range.0),
        num(range.1),
        num(TICK_SIZE)
    )?;
    for tick in ticks {
        writeln!(
            svg,
            r#"<g class="tick" transform="translate(0,{})"><line stroke="currentColor" x2="-{}"/><text fill="currentColor" x="-{}" dy="0.32em">{}</text></g>"#,
            num(tick.position),
            num(TICK_SIZE),
            num(TICK_SIZE + TICK_PADDING),
            escape(&tick.label)
        )?;
    }
    writeln!(svg, "</g>")
}

fn write_legend(
    svg: &mut String,
    legend: &LegendLayout,
    offset_x: f64,
    offset_y: f64,
    scale: f64,
) -> std::fmt::Result {
    writeln!(
        svg,
        r#"<g id="legend" transform="translate({},{}) scale({})">"#,
        num(offset_x),
        num(offset_y),
        num(scale)
    )?;
    writeln!(
        svg,
        r#"<text id="legend-intro" x="{}" y="{}" font-size="8">Legend:</text>"#,
        num(legend.intro.0),
        num(legend.intro.1)
    )?;
    for swatch in &legend.swatches {
        writeln!(
            svg,
            r#"<rect class="legend-cell" x="{}" y="{}" width="{s}" height="{s}" fill="{}" fill-opacity="{}"/>"#,
            num(swatch.x),
            num(swatch.y),
            swatch.fill,
            num(swatch.opacity),
            s = num(swatch.size),
        )?;
    }
    for label in &legend.labels {
        writeln!(
            svg,
            r#"<text class="legend-labels" x="{x}" y="{y}" font-size="5" transform="rotate({r},{x},{y})">{}</text>"#,
            escape(&label.text),
            x = num(label.x),
            y = num(label.y),
            r = num(LABEL_ROTATION),
        )?;
    }
    writeln!(svg, "</g>")
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Escape text content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
