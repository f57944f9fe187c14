//! Data-to-visual mapping for the monthly temperature heatmap.
//!
//! The pipeline is pure and stateless:
//! - [`normalize`]: one-based months to zero-based, absolute temperatures
//! - [`compute_domain`]: extrema and distinct counts
//! - [`bucket_color`]: temperature to palette index
//! - [`make_linear_scale`]: year/month to chart coordinates
//! - [`legend_ticks`]: legend values and labels
//!
//! [`TemperatureGridMapper`] runs all of it and returns a [`HeatmapModel`]
//! for a renderer to draw.

pub mod bucket;
pub mod domain;
pub mod legend;
pub mod mapper;
pub mod normalize;
pub mod scale;

pub use bucket::{bucket_color, segment_boundaries, segment_width};
pub use domain::{compute_domain, Domain};
pub use legend::{
    format_label, legend_ticks, legend_ticks_leading_zero, round_temperature, LegendTick,
};
pub use mapper::{Cell, HeatmapModel, TemperatureGridMapper};
pub use normalize::normalize;
pub use scale::{make_linear_scale, LinearScale};
