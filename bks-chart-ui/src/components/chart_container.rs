//! Mount point for one D3.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the render call targets
    pub id: String,
    #[props(default = 420)]
    pub min_height: u32,
}

/// A bordered card holding the chart div. D3 owns the inner div's children.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let outer = format!(
        "min-height: {}px; width: 100%; margin-bottom: 20px; border: 1px solid #eee; border-radius: 6px; padding: 4px; box-sizing: border-box;",
        props.min_height
    );

    rsx! {
        div {
            style: "{outer}",
            div { id: "{props.id}", style: "width: 100%;" }
        }
    }
}
