//! Date-range filtering of the Base Table.
//!
//! The Base Table is sorted by date, so every filtered table is a contiguous
//! slice of it located with two binary searches.

use bks_core::{base_table::BaseTable, error::DashboardError, ride_record::RideRecord};
use chrono::NaiveDate;
use log::warn;
use std::ops::Deref;

/// Rows of the Base Table whose date lies in an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredTable<'a> {
    rows: &'a [RideRecord],
}

impl<'a> FilteredTable<'a> {
    pub fn empty() -> Self {
        FilteredTable { rows: &[] }
    }

    pub fn rows(&self) -> &'a [RideRecord] {
        self.rows
    }
}

impl Deref for FilteredTable<'_> {
    type Target = [RideRecord];

    fn deref(&self) -> &Self::Target {
        self.rows
    }
}

/// Check a requested range against the table bounds.
pub fn validate_range(
    base: &BaseTable,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), DashboardError> {
    let Some((min_date, max_date)) = base.bounds() else {
        return Err(DashboardError::InvalidRange(
            "the dataset is empty".to_string(),
        ));
    };
    if start > end {
        return Err(DashboardError::InvalidRange(format!(
            "start {} is after end {}",
            start, end
        )));
    }
    if start < min_date || end > max_date {
        return Err(DashboardError::InvalidRange(format!(
            "{} to {} is outside {} to {}",
            start, end, min_date, max_date
        )));
    }
    Ok(())
}

/// Filter with the range validated first; the error is returned to the caller.
pub fn try_filter(
    base: &BaseTable,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<FilteredTable<'_>, DashboardError> {
    validate_range(base, start, end)?;
    let rows = base.rows();
    let lo = rows.partition_point(|ride| ride.date < start);
    let hi = rows.partition_point(|ride| ride.date <= end);
    Ok(FilteredTable { rows: &rows[lo..hi] })
}

/// Rows dated `start..=end`. An invalid range fails closed to an empty table.
pub fn apply_filter(base: &BaseTable, start: NaiveDate, end: NaiveDate) -> FilteredTable<'_> {
    match try_filter(base, start, end) {
        Ok(filtered) => filtered,
        Err(e) => {
            warn!("{}; showing no data", e);
            FilteredTable::empty()
        }
    }
}

/// Clamp a requested range into the table bounds, as the date picker does.
///
/// Returns `None` for an empty table. An inverted range stays inverted so
/// that filtering still rejects it.
pub fn clamp_range(
    base: &BaseTable,
    start: NaiveDate,
    end: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let (min_date, max_date) = base.bounds()?;
    Some((start.clamp(min_date, max_date), end.clamp(min_date, max_date)))
}
