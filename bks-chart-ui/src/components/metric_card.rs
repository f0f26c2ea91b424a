//! Headline metric cards.

use crate::state::AppState;
use bks_utils::numbers::format_thousands;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: u64,
}

/// A single labelled number, rendered with thousands separators.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let value = format_thousands(props.value);
    rsx! {
        div {
            style: "flex: 1; min-width: 160px; padding: 12px 16px; background: #F5F7FA; border-radius: 6px; border: 1px solid #E0E4EA;",
            div {
                style: "font-size: 13px; color: #555; margin-bottom: 4px;",
                "{props.label}"
            }
            div {
                style: "font-size: 26px; font-weight: 600;",
                "{value}"
            }
        }
    }
}

/// Total, casual and registered rides for the current range.
#[component]
pub fn MetricsRow() -> Element {
    let state = use_context::<AppState>();
    let metrics = (state.metrics)();

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 12px 0; flex-wrap: wrap;",
            MetricCard { label: "Total Rides".to_string(), value: metrics.total_rides }
            MetricCard { label: "Total Casual Rides".to_string(), value: metrics.total_casual }
            MetricCard { label: "Total Registered Rides".to_string(), value: metrics.total_registered }
        }
    }
}
