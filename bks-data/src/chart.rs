//! Reshape summaries into the JSON the D3.js charts consume.

use crate::aggregate::{MonthlySummaryRow, SeasonalSummaryRow};
use serde::Serialize;
use serde_json::{json, Value};

pub const LINE_CHART_TITLE: &str = "Monthly Count of Bikeshare Rides";
pub const BAR_CHART_TITLE: &str = "Count of bikeshare rides by season";
pub const Y_AXIS_LABEL: &str = "Total Rides";

/// Line series in drawing order with their colours.
pub const MONTHLY_SERIES: [(&str, &str); 3] = [
    ("casual_bikers", "skyblue"),
    ("registered_bikers", "orange"),
    ("total_bikers", "red"),
];

/// Bar colours per rider type, casual first.
pub const RIDER_COLORS: [&str; 2] = ["skyblue", "orange"];

/// One point of a line series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub series: &'static str,
    pub value: u64,
}

/// Monthly summary as long-form points, three series per month, months in
/// the order given.
pub fn monthly_line_points(monthly: &[MonthlySummaryRow]) -> Vec<SeriesPoint> {
    monthly
        .iter()
        .flat_map(|row| {
            let values = [row.casual_total, row.registered_total, row.count_total];
            MONTHLY_SERIES
                .into_iter()
                .zip(values)
                .map(move |((series, _), value)| SeriesPoint {
                    label: row.year_month.clone(),
                    series,
                    value,
                })
        })
        .collect()
}

pub fn line_chart_data_json(monthly: &[MonthlySummaryRow]) -> String {
    serde_json::to_string(&monthly_line_points(monthly)).unwrap_or_else(|_| "[]".to_string())
}

pub fn line_chart_config_json() -> String {
    json!({
        "title": LINE_CHART_TITLE,
        "xAxisLabel": "",
        "yAxisLabel": Y_AXIS_LABEL,
        "series": MONTHLY_SERIES.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
        "colors": MONTHLY_SERIES.iter().map(|(_, color)| *color).collect::<Vec<_>>(),
        "markers": true,
    })
    .to_string()
}

pub fn bar_chart_data_json(seasonal: &[SeasonalSummaryRow]) -> String {
    serde_json::to_string(seasonal).unwrap_or_else(|_| "[]".to_string())
}

pub fn bar_chart_config_json() -> String {
    let config: Value = json!({
        "title": BAR_CHART_TITLE,
        "xAxisLabel": "",
        "yAxisLabel": Y_AXIS_LABEL,
        "groups": ["casual", "registered"],
        "colors": RIDER_COLORS,
    });
    config.to_string()
}
