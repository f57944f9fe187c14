//! Dataset retrieval from a URL or a local file.
//!
//! HTTP fetches retry transport errors and 5xx responses with exponential
//! backoff. Client errors (4xx) fail immediately.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use heatmap_common::RawDataset;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

/// Where the dataset document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Initial retry delay (doubles on each retry)
    pub retry_delay: Duration,
    pub max_retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            max_retry_delay: Duration::from_secs(30),
        }
    }
}

/// Failure of a single attempt, tagged with whether another try may help.
#[derive(Debug)]
struct AttemptError {
    error: anyhow::Error,
    retryable: bool,
}

impl AttemptError {
    fn retryable(error: anyhow::Error) -> Self {
        Self { error, retryable: true }
    }

    fn fatal(error: anyhow::Error) -> Self {
        Self { error, retryable: false }
    }
}

/// Whether a response status is worth retrying.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

pub struct DatasetFetcher {
    client: Client,
    config: FetchConfig,
}

impl DatasetFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("heatmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch the raw document text.
    pub async fn fetch_text(&self, source: &DatasetSource) -> Result<String> {
        match source {
            DatasetSource::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read dataset {}", path.display()))?;
                debug!(path = %path.display(), bytes = text.len(), "Read dataset file");
                Ok(text)
            }
            DatasetSource::Url(url) => self.fetch_url(url).await,
        }
    }

    /// Fetch and parse the dataset document.
    pub async fn fetch(&self, source: &DatasetSource) -> Result<RawDataset> {
        let text = self.fetch_text(source).await?;
        let raw = RawDataset::from_json(&text)
            .with_context(|| format!("Failed to parse dataset from {}", source))?;
        info!(
            source = %source,
            records = raw.len(),
            base_temperature = raw.base_temperature,
            "Loaded dataset"
        );
        Ok(raw)
    }

    #[instrument(skip(self), fields(url = %url))]
    async fn fetch_url(&self, url: &str) -> Result<String> {
        let mut retry_count = 0;
        let mut delay = self.config.retry_delay;

        loop {
            match self.try_fetch(url).await {
                Ok(text) => {
                    info!(bytes = text.len(), retries = retry_count, "Fetched dataset");
                    return Ok(text);
                }
                Err(AttemptError { error, retryable: false }) => {
                    return Err(error.context(format!("Fetch of {} failed", url)));
                }
                Err(AttemptError { error, .. }) => {
                    retry_count += 1;
                    if retry_count > self.config.max_retries {
                        return Err(error.context(format!(
                            "Fetch of {} failed after {} retries",
                            url, self.config.max_retries
                        )));
                    }

                    warn!(
                        error = %error,
                        retry = retry_count,
                        max_retries = self.config.max_retries,
                        delay_secs = delay.as_secs_f64(),
                        "Fetch failed, retrying"
                    );

                    tokio::time::sleep(delay).await;
                    delay = std::cmp::min(delay * 2, self.config.max_retry_delay);
                }
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<String, AttemptError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AttemptError::retryable(anyhow!(e).context("Request failed")))?;

        let status = response.status();
        if !status.is_success() {
            let error = anyhow!("HTTP {}", status);
            return Err(if is_retryable_status(status) {
                AttemptError::retryable(error)
            } else {
                AttemptError::fatal(error)
            });
        }

        response
            .text()
            .await
            .map_err(|e| AttemptError::retryable(anyhow!(e).context("Failed to read response body")))
    }
}

/// Pick the source: an explicit input file wins over a URL.
pub fn resolve_source(input: Option<PathBuf>, url: &str) -> Result<DatasetSource> {
    match input {
        Some(path) => Ok(DatasetSource::File(path)),
        None if url.starts_with("http://") || url.starts_with("https://") => {
            Ok(DatasetSource::Url(url.to_string()))
        }
        None => bail!("Unsupported dataset URL: {}", url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::SAMPLE_YEAR_JSON;

    #[test]
    fn test_retryable_status() {
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::FORBIDDEN));
    }

    #[test]
    fn test_resolve_source() {
        assert_eq!(
            resolve_source(None, "https://example.com/data.json").unwrap(),
            DatasetSource::Url("https://example.com/data.json".to_string())
        );
        assert_eq!(
            resolve_source(Some(PathBuf::from("data.json")), "https://example.com").unwrap(),
            DatasetSource::File(PathBuf::from("data.json"))
        );
        assert!(resolve_source(None, "ftp://example.com/data.json").is_err());
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global-temperature.json");
        tokio::fs::write(&path, SAMPLE_YEAR_JSON).await.unwrap();

        let fetcher = DatasetFetcher::new(FetchConfig::default()).unwrap();
        let raw = fetcher.fetch(&DatasetSource::File(path)).await.unwrap();
        assert_eq!(raw.len(), 12);
        assert_eq!(raw.monthly_variance[0].year, 1753);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let fetcher = DatasetFetcher::new(FetchConfig::default()).unwrap();
        let source = DatasetSource::File(PathBuf::from("/nonexistent/heatmap.json"));
        assert!(fetcher.fetch(&source).await.is_err());
    }

    #[test]
    fn test_malformed_file_reports_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, test_utils::MALFORMED_JSON).unwrap();

        let fetcher = DatasetFetcher::new(FetchConfig::default()).unwrap();
        let err = tokio_test::block_on(fetcher.fetch(&DatasetSource::File(path))).unwrap_err();
        assert!(format!("{:#}", err).contains("index 1"));
    }
}
