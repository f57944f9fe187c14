//! Common types shared across the temperature heatmap crates.

pub mod error;
pub mod layout;
pub mod record;
pub mod style;

pub use error::{HeatmapError, HeatmapResult};
pub use layout::{ChartLayout, LegendConfig};
pub use record::{month_name, Dataset, RawDataset, RawRecord, TemperatureRecord};
pub use style::{Color, Palette};
