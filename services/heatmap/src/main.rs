//! Global land-surface temperature heatmap generator.
//!
//! Fetches the monthly temperature variance dataset, maps every record to
//! a coloured grid cell and writes the chart as SVG or PNG with:
//! - Retry with exponential backoff for HTTP sources
//! - Optional YAML configuration for layout, legend and palette
//! - Structured logging (JSON or human-readable)

mod config;
mod fetch;
mod output;
mod pipeline;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heatmap_common::Palette;
use renderer::SvgOptions;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use config::AppConfig;
use fetch::{resolve_source, DatasetFetcher, FetchConfig};
use output::{write_output, OutputFormat};
use pipeline::{error_category, render_chart, ChartRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Monthly global land-surface temperature heatmap")]
struct Args {
    /// Dataset URL (defaults to the config file's source_url, then the published dataset)
    #[arg(long, env = "HEATMAP_URL")]
    url: Option<String>,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(short, long, env = "HEATMAP_INPUT", conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, env = "HEATMAP_OUTPUT", default_value = "heatmap.svg")]
    output: PathBuf,

    /// Output format (default: from the output extension)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// YAML configuration file
    #[arg(short, long, env = "HEATMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Palette file (JSON or YAML), overrides the config file
    #[arg(long, env = "HEATMAP_PALETTE")]
    palette: Option<PathBuf>,

    /// Prepend a 0 tick to the legend labels
    #[arg(long)]
    legend_leading_zero: bool,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Raster scale for PNG output
    #[arg(long, default_value = "1.0")]
    scale: f32,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HEATMAP_TIMEOUT", default_value = "30")]
    timeout: u64,

    /// Maximum retry attempts
    #[arg(long, default_value = "3")]
    max_retries: u32,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "json")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(&args.log_level, args.log_format)?;

    info!("Starting temperature heatmap generator");

    if let Err(e) = run(args).await {
        error!(
            error = %format!("{:#}", e),
            category = error_category(&e),
            "Heatmap generation failed"
        );
        return Err(e);
    }
    Ok(())
}

fn init_tracing(log_level: &str, format: LogFormat) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true);

    match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish())?,
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.legend.leading_zero |= args.legend_leading_zero;
    config.validate()?;

    let palette: Palette = config.resolve_palette(args.palette.as_deref())?;
    let format = OutputFormat::resolve(args.format, &args.output)?;

    let url = args
        .url
        .clone()
        .unwrap_or_else(|| config.source_url().to_string());
    let source = resolve_source(args.input.clone(), &url)?;

    let fetcher = DatasetFetcher::new(FetchConfig {
        timeout: Duration::from_secs(args.timeout),
        max_retries: args.max_retries,
        ..FetchConfig::default()
    })?;
    let raw = fetcher.fetch(&source).await?;

    let request = ChartRequest {
        layout: config.layout,
        legend: config.legend,
        palette,
        svg: SvgOptions {
            title: args.title.clone().or_else(|| config.title.clone()),
            description: config.description.clone(),
            ..SvgOptions::default()
        },
        format,
        scale: args.scale,
    };

    let chart = render_chart(&raw, &request)
        .with_context(|| format!("Failed to render dataset from {}", source))?;
    write_output(&args.output, &chart.bytes).await?;

    let domain = &chart.model.domain;
    info!(
        records = chart.model.cells.len(),
        years = %format!("{}-{}", domain.min_year, domain.max_year),
        temperature = %format!("{:.3}..{:.3}", domain.min_temp, domain.max_temp),
        output = %args.output.display(),
        "Heatmap complete"
    );

    Ok(())
}
