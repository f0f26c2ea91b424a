use crate::{base_table::BaseTable, error::DashboardError};
use std::{fmt, path::PathBuf};

#[cfg(feature = "api")]
use log::{error, info};
#[cfg(feature = "api")]
use reqwest::Client;

/// Published cleaned daily dataset for Capital Bikeshare (2011-2012).
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/bimacode/dicoding-bike-sharing/main/bikeshare_day_clean_new.csv";

/// Environment variable hosts read to override the dataset URL.
pub const DATASET_URL_ENV: &str = "BIKESHARE_DATASET_URL";

/// Seconds before a remote fetch is abandoned.
#[cfg(feature = "api")]
pub const FETCH_TIMEOUT_SECS: u64 = 60;

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Remote(String),
    File(PathBuf),
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Remote(DEFAULT_DATASET_URL.to_string())
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Remote(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DatasetSource {
    /// Pick a source from optional host settings: an explicit file wins,
    /// then an explicit URL, then the published dataset.
    pub fn resolve(input: Option<PathBuf>, url: Option<String>) -> Self {
        match (input, url) {
            (Some(path), _) => DatasetSource::File(path),
            (None, Some(url)) if !url.trim().is_empty() => DatasetSource::Remote(url),
            _ => DatasetSource::default(),
        }
    }

    /// Read a local copy of the dataset.
    pub fn load_file(path: &std::path::Path) -> Result<BaseTable, DashboardError> {
        let body = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::DataUnavailable(format!("{}: {}", path.display(), e))
        })?;
        BaseTable::from_csv(&body)
    }

    /// Fetch the raw CSV text. A single attempt; no retries.
    #[cfg(feature = "api")]
    pub async fn fetch_text(&self) -> Result<String, DashboardError> {
        match self {
            DatasetSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                DashboardError::DataUnavailable(format!("{}: {}", path.display(), e))
            }),
            DatasetSource::Remote(url) => {
                let client = Client::builder()
                    .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                    .build()?;
                fetch_remote(&client, url).await
            }
        }
    }

    /// Load the Base Table from this source.
    #[cfg(feature = "api")]
    pub async fn load(&self) -> Result<BaseTable, DashboardError> {
        info!("Loading dataset from {}", self);
        let result = match self {
            DatasetSource::File(path) => Self::load_file(path),
            DatasetSource::Remote(_) => {
                let body = self.fetch_text().await?;
                BaseTable::from_csv(&body)
            }
        };
        if let Err(e) = &result {
            error!("{}", e);
        }
        result
    }
}

/// GET `url` and return the body; non-success status or an empty body is
/// `DataUnavailable`.
#[cfg(feature = "api")]
pub async fn fetch_remote(client: &Client, url: &str) -> Result<String, DashboardError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(DashboardError::DataUnavailable(format!(
            "bad response status for {}: {}",
            url,
            response.status()
        )));
    }
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Err(DashboardError::DataUnavailable(format!(
            "empty response from {}",
            url
        )));
    }
    info!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
