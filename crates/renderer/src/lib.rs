//! Image rendering for the temperature heatmap.
//!
//! Turns a [`grid_mapper::HeatmapModel`] into:
//! - An SVG document: cells with tooltips, year and month axes, legend
//! - A PNG image, by rasterizing that SVG

pub mod axis;
pub mod legend;
pub mod png;
pub mod raster;
pub mod svg;

pub use raster::rasterize;
pub use svg::{render_svg, SvgOptions};
