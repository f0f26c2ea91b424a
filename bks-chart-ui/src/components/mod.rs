//! Reusable Dioxus RSX components for the bike sharing dashboard.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod filter_panel;
mod loading_spinner;
mod metric_card;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use filter_panel::{FilterPanel, LOGO_URL};
pub use loading_spinner::LoadingSpinner;
pub use metric_card::{MetricCard, MetricsRow};
