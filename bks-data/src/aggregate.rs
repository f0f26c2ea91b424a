//! Monthly and seasonal summaries of a filtered table.
//!
//! Both functions are pure: output depends only on the multiset of input
//! rows, never on their order.

use bks_core::{
    ride_record::RideRecord,
    season::{RiderType, Season},
};
use bks_utils::dates::month_label;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Calendar month bucket key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Short month-year label, e.g. "Jan-23".
    pub fn label(&self) -> String {
        month_label(self.year, self.month).unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Running sums of the three ride counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RideTotals {
    pub casual: u64,
    pub registered: u64,
    pub count: u64,
}

impl RideTotals {
    pub fn add(&mut self, ride: &RideRecord) {
        self.casual += u64::from(ride.casual);
        self.registered += u64::from(ride.registered);
        self.count += u64::from(ride.count);
    }

    pub fn of(rows: &[RideRecord]) -> Self {
        rows.iter().fold(RideTotals::default(), |mut totals, ride| {
            totals.add(ride);
            totals
        })
    }

    pub fn for_rider(&self, rider_type: RiderType) -> u64 {
        match rider_type {
            RiderType::Casual => self.casual,
            RiderType::Registered => self.registered,
        }
    }
}

/// Ride totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummaryRow {
    /// Month label as shown on the chart axis ("Jan-23").
    pub year_month: String,
    #[serde(skip)]
    pub period: YearMonth,
    pub casual_total: u64,
    pub registered_total: u64,
    pub count_total: u64,
}

/// Wide seasonal totals, before reshaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonTotals {
    pub season: Season,
    pub casual: u64,
    pub registered: u64,
    pub count: u64,
}

/// One (season, rider type) cell of the long-form seasonal summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalSummaryRow {
    pub season: Season,
    pub rider_type: RiderType,
    pub rider_count: u64,
}

/// Sum rides per calendar month, oldest month first.
///
/// Months without rows are omitted rather than zero-filled.
pub fn monthly_summary(rows: &[RideRecord]) -> Vec<MonthlySummaryRow> {
    let mut buckets: BTreeMap<YearMonth, RideTotals> = BTreeMap::new();
    for ride in rows {
        buckets.entry(YearMonth::of(ride.date)).or_default().add(ride);
    }
    buckets
        .into_iter()
        .map(|(period, totals)| MonthlySummaryRow {
            year_month: period.label(),
            period,
            casual_total: totals.casual,
            registered_total: totals.registered,
            count_total: totals.count,
        })
        .collect()
}

fn season_buckets(rows: &[RideRecord]) -> BTreeMap<Season, RideTotals> {
    let mut buckets: BTreeMap<Season, RideTotals> = BTreeMap::new();
    for ride in rows {
        buckets.entry(ride.season).or_default().add(ride);
    }
    buckets
}

/// Sum rides per season, in Spring, Summer, Fall, Winter order.
pub fn season_totals(rows: &[RideRecord]) -> Vec<SeasonTotals> {
    season_buckets(rows)
        .into_iter()
        .map(|(season, totals)| SeasonTotals {
            season,
            casual: totals.casual,
            registered: totals.registered,
            count: totals.count,
        })
        .collect()
}

/// Seasonal totals melted to long form: a casual row then a registered row
/// for every season present. The combined count is not carried over.
pub fn seasonal_summary(rows: &[RideRecord]) -> Vec<SeasonalSummaryRow> {
    season_buckets(rows)
        .into_iter()
        .flat_map(|(season, totals)| {
            RiderType::ALL.into_iter().map(move |rider_type| SeasonalSummaryRow {
                season,
                rider_type,
                rider_count: totals.for_rider(rider_type),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ride(y: i32, m: u32, d: u32, casual: u32, registered: u32, season: Season) -> RideRecord {
        RideRecord::new(date(y, m, d), casual, registered, season)
    }

    fn mixed_rows() -> Vec<RideRecord> {
        vec![
            ride(2012, 7, 4, 3065, 2978, Season::Summer),
            ride(2011, 12, 25, 303, 451, Season::Winter),
            ride(2012, 1, 1, 686, 1608, Season::Winter),
            ride(2011, 4, 10, 1188, 2238, Season::Spring),
            ride(2011, 10, 15, 2397, 3715, Season::Fall),
            ride(2011, 12, 24, 440, 1000, Season::Winter),
            ride(2012, 3, 25, 2658, 3954, Season::Spring),
        ]
    }

    #[test]
    fn test_worked_example() {
        let rows = vec![
            ride(2023, 1, 5, 10, 40, Season::Winter),
            ride(2023, 2, 10, 5, 15, Season::Winter),
        ];
        let monthly = monthly_summary(&rows);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].year_month, "Jan-23");
        assert_eq!(
            (monthly[0].casual_total, monthly[0].registered_total, monthly[0].count_total),
            (10, 40, 50)
        );
        assert_eq!(monthly[1].year_month, "Feb-23");
        assert_eq!(
            (monthly[1].casual_total, monthly[1].registered_total, monthly[1].count_total),
            (5, 15, 20)
        );

        let seasonal = seasonal_summary(&rows);
        assert_eq!(
            seasonal,
            vec![
                SeasonalSummaryRow {
                    season: Season::Winter,
                    rider_type: RiderType::Casual,
                    rider_count: 15,
                },
                SeasonalSummaryRow {
                    season: Season::Winter,
                    rider_type: RiderType::Registered,
                    rider_count: 55,
                },
            ]
        );
    }

    #[test]
    fn test_monthly_is_chronological_for_any_order() {
        let mut rows = mixed_rows();
        let expected = monthly_summary(&rows);
        let labels: Vec<&str> = expected.iter().map(|r| r.year_month.as_str()).collect();
        assert_eq!(labels, vec!["Apr-11", "Oct-11", "Dec-11", "Jan-12", "Mar-12", "Jul-12"]);

        rows.reverse();
        assert_eq!(monthly_summary(&rows), expected);
        rows.sort_by_key(|r| r.casual);
        assert_eq!(monthly_summary(&rows), expected);
    }

    #[test]
    fn test_monthly_buckets_by_calendar_month() {
        let rows = mixed_rows();
        let december = monthly_summary(&rows)
            .into_iter()
            .find(|r| r.period == YearMonth { year: 2011, month: 12 })
            .unwrap();
        assert_eq!(december.casual_total, 303 + 440);
        assert_eq!(december.registered_total, 451 + 1000);
        assert_eq!(december.count_total, 754 + 1440);
    }

    #[test]
    fn test_same_month_different_years_stay_apart() {
        let rows = vec![
            ride(2011, 5, 1, 1, 1, Season::Spring),
            ride(2012, 5, 1, 2, 2, Season::Spring),
        ];
        let labels: Vec<String> = monthly_summary(&rows).into_iter().map(|r| r.year_month).collect();
        assert_eq!(labels, vec!["May-11", "May-12"]);
    }

    #[test]
    fn test_seasonal_follows_fixed_order() {
        let mut rows = mixed_rows();
        let expected_seasons = vec![
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Fall,
            Season::Fall,
            Season::Winter,
            Season::Winter,
        ];
        for _ in 0..2 {
            let seasonal = seasonal_summary(&rows);
            let seasons: Vec<Season> = seasonal.iter().map(|r| r.season).collect();
            assert_eq!(seasons, expected_seasons);
            let riders: Vec<RiderType> = seasonal.iter().map(|r| r.rider_type).collect();
            assert_eq!(riders[0], RiderType::Casual);
            assert_eq!(riders[1], RiderType::Registered);
            rows.reverse();
        }
    }

    #[test]
    fn test_seasonal_omits_absent_seasons() {
        let rows = vec![
            ride(2011, 12, 25, 303, 451, Season::Winter),
            ride(2011, 4, 10, 1188, 2238, Season::Spring),
        ];
        let seasons: Vec<Season> = seasonal_summary(&rows).iter().map(|r| r.season).collect();
        assert_eq!(
            seasons,
            vec![Season::Spring, Season::Spring, Season::Winter, Season::Winter]
        );
    }

    #[test]
    fn test_totals_are_preserved() {
        let rows = mixed_rows();
        let totals = RideTotals::of(&rows);

        let monthly = monthly_summary(&rows);
        assert_eq!(monthly.iter().map(|r| r.count_total).sum::<u64>(), totals.count);
        assert_eq!(monthly.iter().map(|r| r.casual_total).sum::<u64>(), totals.casual);
        assert_eq!(
            monthly.iter().map(|r| r.registered_total).sum::<u64>(),
            totals.registered
        );

        let seasonal = seasonal_summary(&rows);
        for rider_type in RiderType::ALL {
            let sum: u64 = seasonal
                .iter()
                .filter(|r| r.rider_type == rider_type)
                .map(|r| r.rider_count)
                .sum();
            assert_eq!(sum, totals.for_rider(rider_type));
        }
        assert_eq!(seasonal.iter().map(|r| r.rider_count).sum::<u64>(), totals.count);
    }

    #[test]
    fn test_season_totals_keep_count() {
        let totals = season_totals(&mixed_rows());
        let winter = totals.iter().find(|t| t.season == Season::Winter).unwrap();
        assert_eq!(winter.count, winter.casual + winter.registered);
        assert_eq!(winter.casual, 303 + 686 + 440);
    }

    #[test]
    fn test_seasonal_summary_melts_season_totals() {
        let rows = mixed_rows();
        let wide = season_totals(&rows);
        let long = seasonal_summary(&rows);
        assert_eq!(long.len(), wide.len() * 2);
        for (pair, totals) in long.chunks(2).zip(&wide) {
            assert_eq!(pair[0].season, totals.season);
            assert_eq!(pair[0].rider_type, RiderType::Casual);
            assert_eq!(pair[0].rider_count, totals.casual);
            assert_eq!(pair[1].season, totals.season);
            assert_eq!(pair[1].rider_type, RiderType::Registered);
            assert_eq!(pair[1].rider_count, totals.registered);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(monthly_summary(&[]).is_empty());
        assert!(seasonal_summary(&[]).is_empty());
        assert!(season_totals(&[]).is_empty());
        assert_eq!(RideTotals::of(&[]), RideTotals::default());
    }

    #[test]
    fn test_idempotent() {
        let rows = mixed_rows();
        assert_eq!(monthly_summary(&rows), monthly_summary(&rows));
        assert_eq!(seasonal_summary(&rows), seasonal_summary(&rows));
    }
}
