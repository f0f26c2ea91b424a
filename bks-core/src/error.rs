use std::fmt;

/// Errors surfaced by the dashboard core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// The dataset could not be fetched or parsed. Fatal at startup.
    DataUnavailable(String),
    /// The selected date range is inverted or outside the table bounds.
    InvalidRange(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::DataUnavailable(reason) => write!(f, "Dataset unavailable: {}", reason),
            DashboardError::InvalidRange(reason) => write!(f, "Invalid date range: {}", reason),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<csv::Error> for DashboardError {
    fn from(value: csv::Error) -> Self {
        DashboardError::DataUnavailable(format!("malformed CSV: {}", value))
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(value: std::io::Error) -> Self {
        DashboardError::DataUnavailable(value.to_string())
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for DashboardError {
    fn from(value: reqwest::Error) -> Self {
        DashboardError::DataUnavailable(format!("request failed: {}", value))
    }
}
