//! Error types for the temperature heatmap crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Data Errors ===
    #[error("Dataset contains no records")]
    EmptyDataset,

    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Failed to parse dataset: {0}")]
    ParseError(String),

    // === Configuration Errors ===
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Infrastructure Errors ===
    #[error("IO error: {0}")]
    IoError(String),
}

impl HeatmapError {
    /// Short category name, used as a structured logging field.
    pub fn category(&self) -> &'static str {
        match self {
            HeatmapError::EmptyDataset
            | HeatmapError::MalformedRecord { .. }
            | HeatmapError::ParseError(_) => "data",
            HeatmapError::InvalidPalette(_) | HeatmapError::InvalidLayout(_) => "config",
            HeatmapError::RenderError(_) => "render",
            HeatmapError::IoError(_) => "io",
        }
    }

    /// Whether the error was caused by the input dataset rather than by
    /// configuration or the environment.
    pub fn is_data_error(&self) -> bool {
        self.category() == "data"
    }
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for HeatmapError {
    fn from(err: serde_yaml::Error) -> Self {
        HeatmapError::ParseError(format!("YAML error: {}", err))
    }
}
