use crate::{date_range::DayRange, error::DashboardError, ride_record::CsvColumns, ride_record::RideRecord};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::{info, warn};
use std::collections::HashSet;

/// The full, unfiltered dataset, ordered by date. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseTable {
    rows: Vec<RideRecord>,
}

impl BaseTable {
    /// Build a table from records that already satisfy the count invariant.
    /// Records are stable-sorted by date.
    pub fn from_records(mut rows: Vec<RideRecord>) -> Self {
        rows.sort_by_key(|ride| ride.date);
        BaseTable { rows }
    }

    /// Parse the dataset CSV (header row required, columns located by name).
    ///
    /// Any malformed row fails the whole load.
    pub fn from_csv(csv_data: &str) -> Result<Self, DashboardError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let columns = CsvColumns::from_headers(rdr.headers()?)?;

        let mut rows = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            if record.iter().all(|f| f.is_empty()) {
                continue;
            }
            rows.push(columns.parse_record(&record, i + 1)?);
        }
        if rows.is_empty() {
            return Err(DashboardError::DataUnavailable(
                "dataset has no rows".to_string(),
            ));
        }

        let table = BaseTable::from_records(rows);
        if let Some((min_date, max_date)) = table.bounds() {
            info!(
                "Loaded {} ride records from {} to {}",
                table.len(),
                min_date,
                max_date
            );
        }
        let gaps = table.missing_days();
        if gaps > 0 {
            warn!("{} calendar days inside the dataset range have no record", gaps);
        }
        Ok(table)
    }

    pub fn rows(&self) -> &[RideRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|ride| ride.date)
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|ride| ride.date)
    }

    /// `(min_date, max_date)`, or `None` for an empty table.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.min_date()?, self.max_date()?))
    }

    /// Count of calendar days between the bounds that have no record.
    pub fn missing_days(&self) -> usize {
        let Some((min_date, max_date)) = self.bounds() else {
            return 0;
        };
        let present: HashSet<NaiveDate> = self.rows.iter().map(|ride| ride.date).collect();
        DayRange::new(min_date, max_date)
            .filter(|day| !present.contains(day))
            .count()
    }
}
