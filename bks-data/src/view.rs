//! One full recomputation pass: filter, metrics, both summaries.

use crate::aggregate::{monthly_summary, seasonal_summary, MonthlySummaryRow, RideTotals, SeasonalSummaryRow};
use crate::filter::apply_filter;
use bks_core::{base_table::BaseTable, ride_record::RideRecord};
use bks_utils::dates::parse_date;
use chrono::NaiveDate;
use log::warn;
use serde::Serialize;

/// The three headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SummaryMetrics {
    pub total_rides: u64,
    pub total_casual: u64,
    pub total_registered: u64,
}

impl SummaryMetrics {
    pub fn from_rows(rows: &[RideRecord]) -> Self {
        let totals = RideTotals::of(rows);
        SummaryMetrics {
            total_rides: totals.count,
            total_casual: totals.casual,
            total_registered: totals.registered,
        }
    }
}

/// Everything the dashboard renders for one selected date range.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DashboardView {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub metrics: SummaryMetrics,
    pub monthly: Vec<MonthlySummaryRow>,
    pub seasonal: Vec<SeasonalSummaryRow>,
}

impl DashboardView {
    /// Recompute the view for `start..=end`. Nothing is cached between calls.
    pub fn compute(base: &BaseTable, start: NaiveDate, end: NaiveDate) -> Self {
        let filtered = apply_filter(base, start, end);
        DashboardView {
            start_date: Some(start),
            end_date: Some(end),
            metrics: SummaryMetrics::from_rows(&filtered),
            monthly: monthly_summary(&filtered),
            seasonal: seasonal_summary(&filtered),
        }
    }

    /// Same as [`compute`](Self::compute) from "YYYY-MM-DD" strings as a date
    /// input produces them. An unparsable bound yields the empty view.
    pub fn from_input(base: &BaseTable, start: &str, end: &str) -> Self {
        match (parse_date(start), parse_date(end)) {
            (Ok(start), Ok(end)) => Self::compute(base, start, end),
            _ => {
                warn!("Unparsable date range '{}' to '{}'; showing no data", start, end);
                DashboardView::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bks_core::season::Season;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_table() -> BaseTable {
        BaseTable::from_records(vec![
            RideRecord::new(date(2011, 1, 1), 331, 654, Season::Winter),
            RideRecord::new(date(2011, 1, 2), 131, 670, Season::Winter),
            RideRecord::new(date(2011, 3, 21), 640, 1437, Season::Spring),
            RideRecord::new(date(2011, 6, 21), 1027, 3957, Season::Summer),
            RideRecord::new(date(2011, 9, 23), 1200, 3500, Season::Fall),
        ])
    }

    #[test]
    fn test_metrics_over_full_range() {
        let table = sample_table();
        let (min, max) = table.bounds().unwrap();
        let view = DashboardView::compute(&table, min, max);
        assert_eq!(view.metrics.total_casual, 331 + 131 + 640 + 1027 + 1200);
        assert_eq!(view.metrics.total_registered, 654 + 670 + 1437 + 3957 + 3500);
        assert_eq!(
            view.metrics.total_rides,
            view.metrics.total_casual + view.metrics.total_registered
        );
        assert_eq!(view.monthly.len(), 4);
        assert_eq!(view.seasonal.len(), 8);
    }

    #[test]
    fn test_metrics_match_summaries() {
        let table = sample_table();
        let view = DashboardView::compute(&table, date(2011, 1, 2), date(2011, 6, 21));
        assert_eq!(
            view.monthly.iter().map(|r| r.count_total).sum::<u64>(),
            view.metrics.total_rides
        );
        assert_eq!(
            view.seasonal.iter().map(|r| r.rider_count).sum::<u64>(),
            view.metrics.total_rides
        );
    }

    #[test]
    fn test_invalid_range_is_all_zero() {
        let table = sample_table();
        for (start, end) in [
            (date(2011, 6, 1), date(2011, 1, 1)),
            (date(2010, 1, 1), date(2010, 12, 31)),
            (date(2011, 9, 1), date(2012, 1, 1)),
        ] {
            let view = DashboardView::compute(&table, start, end);
            assert_eq!(view.metrics, SummaryMetrics::default());
            assert!(view.monthly.is_empty());
            assert!(view.seasonal.is_empty());
            assert!(view.is_empty());
        }
    }

    #[test]
    fn test_from_input() {
        let table = sample_table();
        let view = DashboardView::from_input(&table, "2011-01-01", "2011-01-31");
        assert_eq!(view.metrics.total_rides, 985 + 801);
        assert_eq!(view.monthly[0].year_month, "Jan-11");

        let view = DashboardView::from_input(&table, "", "2011-01-31");
        assert_eq!(view, DashboardView::default());
    }

    #[test]
    fn test_recompute_is_stateless() {
        let table = sample_table();
        let first = DashboardView::compute(&table, date(2011, 1, 1), date(2011, 3, 31));
        let _other = DashboardView::compute(&table, date(2011, 6, 1), date(2011, 9, 30));
        let again = DashboardView::compute(&table, date(2011, 1, 1), date(2011, 3, 31));
        assert_eq!(first, again);
    }
}
