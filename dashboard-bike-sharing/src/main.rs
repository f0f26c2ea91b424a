//! Capital Bikeshare: Bike-Sharing Dashboard
//!
//! Daily ride counts for 2011-2012, filtered by a date range and shown as
//! three headline metrics, a monthly trend line and a seasonal bar chart.
//!
//! Data flow:
//! 1. On mount: fetch the published CSV with the browser `fetch` API and
//!    load it into the Base Table. Any failure stops here with an error box.
//! 2. The picker defaults to the full span of the data.
//! 3. On date range change: recompute the dashboard view from the Base Table
//!    and re-render both D3.js charts.

use bks_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FilterPanel, LoadingSpinner, MetricsRow,
};
use bks_chart_ui::js_bridge;
use bks_chart_ui::state::AppState;
use bks_core::{base_table::BaseTable, source::DEFAULT_DATASET_URL};
use bks_data::{chart, view::DashboardView};
use bks_utils::dates::format_date;
use dioxus::prelude::*;

const D3_URL: &str = "https://d3js.org/d3.v7.min.js";

const PAGE_TITLE: &str = "Capital Bikeshare: Bike-Sharing Dashboard";

/// DOM ids for the D3 chart containers.
const LINE_CHART_ID: &str = "monthly-rides-chart";
const BAR_CHART_ID: &str = "seasonal-rides-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bike-sharing-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: fetch and load the dataset once on mount ───
    use_effect(move || {
        spawn(async move {
            let table = match js_bridge::fetch_text(DEFAULT_DATASET_URL).await {
                Ok(body) => BaseTable::from_csv(&body),
                Err(e) => Err(e),
            };

            match table {
                Ok(table) => {
                    let Some((min_date, max_date)) = table.bounds() else {
                        state.error_msg.set(Some("Dataset unavailable: dataset has no rows".to_string()));
                        state.loading.set(false);
                        return;
                    };
                    log::info!(
                        "Loaded {} days from {} to {}",
                        table.len(),
                        min_date,
                        max_date
                    );
                    let min_date = format_date(&min_date);
                    let max_date = format_date(&max_date);
                    state.min_date.set(min_date.clone());
                    state.max_date.set(max_date.clone());
                    state.start_date.set(min_date);
                    state.end_date.set(max_date);
                    state.table.set(Some(table));
                    state.loading.set(false);

                    js_bridge::init_charts();
                }
                Err(e) => {
                    log::error!("{}", e);
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                }
            }
        });
    });

    // ─── Effect 2: recompute the view and re-render on range change ───
    use_effect(move || {
        let loading = (state.loading)();
        let start = (state.start_date)();
        let end = (state.end_date)();

        if loading || (state.error_msg)().is_some() {
            return;
        }

        let view = match &*state.table.read() {
            Some(table) => DashboardView::from_input(table, &start, &end),
            None => return,
        };

        state.metrics.set(view.metrics);

        js_bridge::render_line_chart(
            LINE_CHART_ID,
            &chart::line_chart_data_json(&view.monthly),
            &chart::line_chart_config_json(),
        );
        js_bridge::render_grouped_bar_chart(
            BAR_CHART_ID,
            &chart::bar_chart_data_json(&view.seasonal),
            &chart::bar_chart_config_json(),
        );
    });

    // ─── Render ───
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Script { src: "{D3_URL}" }

        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 26px; margin: 8px 0 16px 0;",
                "{PAGE_TITLE}"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                FilterPanel {}

                MetricsRow {}

                ChartHeader {
                    title: chart::LINE_CHART_TITLE.to_string(),
                    subtitle: "Casual, registered and total rides per month".to_string(),
                }
                ChartContainer {
                    id: LINE_CHART_ID.to_string(),
                }

                ChartHeader {
                    title: chart::BAR_CHART_TITLE.to_string(),
                    subtitle: "Casual and registered rides per season".to_string(),
                }
                ChartContainer {
                    id: BAR_CHART_ID.to_string(),
                }

                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 12px;",
                    "Data: Capital Bikeshare daily ride counts, 2011-2012."
                }
            }
        }
    }
}
