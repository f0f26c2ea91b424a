//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The Base Table is written once by the startup loader and only read afterwards.

use bks_core::base_table::BaseTable;
use bks_data::view::SummaryMetrics;
use bks_utils::dates::{format_date, parse_date};
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until the startup fetch completes)
    pub table: Signal<Option<BaseTable>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Startup failure message; when set no dashboard is shown
    pub error_msg: Signal<Option<String>>,
    /// Earliest selectable date ("YYYY-MM-DD")
    pub min_date: Signal<String>,
    /// Latest selectable date ("YYYY-MM-DD")
    pub max_date: Signal<String>,
    /// Start date for date range filtering
    pub start_date: Signal<String>,
    /// End date for date range filtering
    pub end_date: Signal<String>,
    /// Headline metrics for the current range
    pub metrics: Signal<SummaryMetrics>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            metrics: Signal::new(SummaryMetrics::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a picked date into `[min, max]`, all as "YYYY-MM-DD".
///
/// A value that does not parse is returned unchanged so the filter can
/// reject it.
pub fn constrain_date(value: &str, min: &str, max: &str) -> String {
    match (parse_date(value), parse_date(min), parse_date(max)) {
        (Ok(date), Ok(min), Ok(max)) if min <= max => format_date(&date.clamp(min, max)),
        _ => value.to_string(),
    }
}
