//! Startup failure box. When shown, nothing else of the dashboard renders.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Extra line under the message
    #[props(default = "Reload the page to try again.".to_string())]
    pub hint: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 16px; margin: 16px 0; background: #FFEBEE; color: #B71C1C; border-left: 4px solid #C62828; border-radius: 4px;",
            strong { "The dashboard could not load its data." }
            p {
                style: "margin: 6px 0 0 0; font-family: monospace; font-size: 13px;",
                "{props.message}"
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: #666;",
                    "{props.hint}"
                }
            }
        }
    }
}
