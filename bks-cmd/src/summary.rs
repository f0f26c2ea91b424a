//! Print the dashboard numbers for a date range.

use crate::OutputFormat;
use anyhow::{anyhow, Context};
use bks_core::{base_table::BaseTable, source::DatasetSource};
use bks_data::{filter::clamp_range, view::DashboardView};
use bks_utils::{
    dates::{format_date, parse_date},
    numbers::format_thousands,
};
use chrono::NaiveDate;
use log::info;
use std::fmt::{self, Write};
use std::path::PathBuf;

pub async fn run_summary(
    url: Option<String>,
    input: Option<PathBuf>,
    start: Option<&str>,
    end: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let source = DatasetSource::resolve(input, url);
    let table = source.load().await?;

    let (start, end) = resolve_range(&table, start, end)?;
    info!("Summarizing {} to {}", start, end);
    let view = DashboardView::compute(&table, start, end);

    match format {
        OutputFormat::Table => {
            let mut text = String::new();
            write_table(&mut text, &view)?;
            print!("{}", text);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}

/// Parse the requested bounds, default the missing ones to the table
/// bounds, and clamp into range the way the date picker does.
pub fn resolve_range(
    table: &BaseTable,
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let (min_date, max_date) = table
        .bounds()
        .ok_or_else(|| anyhow!("dataset has no rows"))?;

    let start = match start {
        Some(s) => parse_date(s).with_context(|| format!("invalid --start '{}'", s))?,
        None => min_date,
    };
    let end = match end {
        Some(s) => parse_date(s).with_context(|| format!("invalid --end '{}'", s))?,
        None => max_date,
    };

    let clamped = clamp_range(table, start, end).unwrap_or((start, end));
    if clamped != (start, end) {
        info!(
            "Clamped {} to {} into dataset bounds {} to {}",
            start, end, min_date, max_date
        );
    }
    Ok(clamped)
}

/// Plain-text rendering: metrics, then the monthly and seasonal tables.
pub fn write_table<W: fmt::Write>(out: &mut W, view: &DashboardView) -> fmt::Result {
    let range = match (view.start_date, view.end_date) {
        (Some(start), Some(end)) => format!("{} to {}", format_date(&start), format_date(&end)),
        _ => "no range".to_string(),
    };
    writeln!(out, "Capital Bikeshare rides, {}", range)?;
    writeln!(out)?;
    for (label, value) in [
        ("Total Rides", view.metrics.total_rides),
        ("Total Casual Rides", view.metrics.total_casual),
        ("Total Registered Rides", view.metrics.total_registered),
    ] {
        writeln!(out, "{:<24}{:>14}", label, format_thousands(value))?;
    }

    if view.is_empty() {
        writeln!(out)?;
        return writeln!(out, "No rides in the selected range.");
    }

    writeln!(out)?;
    writeln!(out, "{:<8}{:>12}{:>14}{:>12}", "month", "casual", "registered", "total")?;
    for row in &view.monthly {
        writeln!(
            out,
            "{:<8}{:>12}{:>14}{:>12}",
            row.year_month,
            format_thousands(row.casual_total),
            format_thousands(row.registered_total),
            format_thousands(row.count_total)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{:<8}{:<12}{:>12}", "season", "rider", "rides")?;
    for row in &view.seasonal {
        writeln!(
            out,
            "{:<8}{:<12}{:>12}",
            row.season.as_str(),
            row.rider_type.as_str(),
            format_thousands(row.rider_count)
        )?;
    }
    Ok(())
}
