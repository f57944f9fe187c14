//! Configuration file loading.
//!
//! Every section is optional; missing values fall back to the published
//! chart's dimensions and palette.
//!
//! ```yaml
//! source_url: https://example.com/global-temperature.json
//! title: Monthly Global Land-Surface Temperature
//! layout: { width: 1200, height: 700, padding: 70 }
//! legend: { leading_zero: true }
//! palette_file: palettes/blues.yaml
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use heatmap_common::{ChartLayout, LegendConfig, Palette};
use serde::Deserialize;
use tracing::{debug, info};

/// Published dataset location.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Root configuration loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub layout: ChartLayout,

    #[serde(default)]
    pub legend: LegendConfig,

    /// Inline palette
    #[serde(default)]
    pub palette: Option<Palette>,

    /// Palette file, resolved relative to the config file
    #[serde(default)]
    pub palette_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        // Relative palette paths are relative to the config file
        if let (Some(palette_file), Some(dir)) = (&config.palette_file, path.parent()) {
            if palette_file.is_relative() {
                config.palette_file = Some(dir.join(palette_file));
            }
        }

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Check layout and legend dimensions.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate().context("Invalid chart layout")?;
        self.legend.validate().context("Invalid legend layout")?;
        Ok(())
    }

    /// The palette to draw with: `override_file` if given, then
    /// `palette_file`, then the inline palette, then the reference palette.
    pub fn resolve_palette(&self, override_file: Option<&Path>) -> Result<Palette> {
        let file = override_file.or(self.palette_file.as_deref());
        let palette = match (file, &self.palette) {
            (Some(file), _) => Palette::from_file(file)
                .with_context(|| format!("Failed to load palette {}", file.display()))?,
            (None, Some(inline)) => {
                inline.validate().context("Invalid inline palette")?;
                inline.clone()
            }
            (None, None) => Palette::reference(),
        };
        debug!(name = %palette.name, colors = palette.len(), "Resolved palette");
        Ok(palette)
    }

    pub fn source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
    }
}
