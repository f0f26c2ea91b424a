//! Sidebar-style filter panel: dataset logo above the date range picker.

use super::DateRangePicker;
use dioxus::prelude::*;

/// Capital Bikeshare logo published next to the dataset.
pub const LOGO_URL: &str =
    "https://raw.githubusercontent.com/bimacode/dicoding-bike-sharing/main/pngwing.com.png";

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    #[props(default = LOGO_URL.to_string())]
    pub logo_url: String,
}

#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    rsx! {
        div {
            style: "padding: 8px 12px; background: #FAFAFA; border: 1px solid #e0e0e0; border-radius: 4px;",
            if !props.logo_url.is_empty() {
                img {
                    src: "{props.logo_url}",
                    alt: "Capital Bikeshare",
                    style: "display: block; max-width: 180px; margin-bottom: 8px;",
                }
            }
            h4 {
                style: "margin: 0 0 4px 0;",
                "Filter:"
            }
            DateRangePicker {}
        }
    }
}
