use crate::{error::DashboardError, season::Season};
use bks_utils::dates::parse_date_lenient;
use chrono::NaiveDate;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Header names accepted for each required column (compared case-insensitively).
pub const DATE_HEADERS: [&str; 3] = ["dateday", "dteday", "date"];
pub const CASUAL_HEADERS: [&str; 1] = ["casual"];
pub const REGISTERED_HEADERS: [&str; 1] = ["registered"];
pub const COUNT_HEADERS: [&str; 3] = ["count", "cnt", "total"];
pub const SEASON_HEADERS: [&str; 1] = ["season"];

/// One day of bike-rental counts.
///
/// `count == casual + registered` holds for every record produced by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RideRecord {
    pub date: NaiveDate,
    pub casual: u32,
    pub registered: u32,
    pub count: u32,
    pub season: Season,
}

impl RideRecord {
    /// Build a record whose `count` is the sum of both rider types.
    pub fn new(date: NaiveDate, casual: u32, registered: u32, season: Season) -> Self {
        RideRecord {
            date,
            casual,
            registered,
            count: casual + registered,
            season,
        }
    }

    pub fn is_consistent(&self) -> bool {
        u64::from(self.casual) + u64::from(self.registered) == u64::from(self.count)
    }
}

/// Positions of the required columns within a CSV header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvColumns {
    pub date: usize,
    pub casual: usize,
    pub registered: usize,
    pub count: usize,
    pub season: usize,
}

impl CsvColumns {
    /// Locate the required columns by name; unknown columns are ignored.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, DashboardError> {
        let find = |names: &[&str]| -> Result<usize, DashboardError> {
            headers
                .iter()
                .position(|h| {
                    let h = h.trim();
                    names.iter().any(|name| h.eq_ignore_ascii_case(name))
                })
                .ok_or_else(|| {
                    DashboardError::DataUnavailable(format!(
                        "missing required column '{}'",
                        names[0]
                    ))
                })
        };
        Ok(CsvColumns {
            date: find(&DATE_HEADERS[..])?,
            casual: find(&CASUAL_HEADERS[..])?,
            registered: find(&REGISTERED_HEADERS[..])?,
            count: find(&COUNT_HEADERS[..])?,
            season: find(&SEASON_HEADERS[..])?,
        })
    }

    /// Parse one data row. `line` is the 1-based data line used in error messages.
    pub fn parse_record(
        &self,
        record: &StringRecord,
        line: usize,
    ) -> Result<RideRecord, DashboardError> {
        let raw_date = field(record, self.date, "date", line)?;
        let date = parse_date_lenient(raw_date).map_err(|e| {
            DashboardError::DataUnavailable(format!("line {}: {}", line, e))
        })?;
        let casual = count_field(record, self.casual, "casual", line)?;
        let registered = count_field(record, self.registered, "registered", line)?;
        let count = count_field(record, self.count, "count", line)?;
        let raw_season = field(record, self.season, "season", line)?;
        let season: Season = raw_season.parse().map_err(|_| {
            DashboardError::DataUnavailable(format!(
                "line {}: unknown season '{}'",
                line, raw_season
            ))
        })?;

        let ride = RideRecord {
            date,
            casual,
            registered,
            count,
            season,
        };
        if !ride.is_consistent() {
            return Err(DashboardError::DataUnavailable(format!(
                "line {}: count {} != casual {} + registered {}",
                line, count, casual, registered
            )));
        }
        Ok(ride)
    }
}

fn field<'r>(
    record: &'r StringRecord,
    idx: usize,
    name: &str,
    line: usize,
) -> Result<&'r str, DashboardError> {
    record.get(idx).map(str::trim).ok_or_else(|| {
        DashboardError::DataUnavailable(format!("line {}: missing '{}' field", line, name))
    })
}

fn count_field(
    record: &StringRecord,
    idx: usize,
    name: &str,
    line: usize,
) -> Result<u32, DashboardError> {
    let raw = field(record, idx, name, line)?;
    raw.parse::<u32>().map_err(|_| {
        DashboardError::DataUnavailable(format!(
            "line {}: '{}' is not a non-negative count: '{}'",
            line, name, raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::{CsvColumns, RideRecord};
    use crate::{error::DashboardError, season::Season};
    use chrono::NaiveDate;
    use csv::StringRecord;

    fn headers() -> StringRecord {
        StringRecord::from(vec![
            "instant", "dateday", "season", "year", "casual", "registered", "count",
        ])
    }

    #[test]
    fn test_columns_found_by_name() {
        let columns = CsvColumns::from_headers(&headers()).unwrap();
        assert_eq!(columns.date, 1);
        assert_eq!(columns.season, 2);
        assert_eq!(columns.casual, 4);
        assert_eq!(columns.registered, 5);
        assert_eq!(columns.count, 6);
    }

    #[test]
    fn test_columns_accept_uci_aliases() {
        let raw = StringRecord::from(vec!["dteday", "Season", "CASUAL", "registered", "cnt"]);
        let columns = CsvColumns::from_headers(&raw).unwrap();
        assert_eq!(columns.date, 0);
        assert_eq!(columns.count, 4);
    }

    #[test]
    fn test_missing_column_is_data_unavailable() {
        let raw = StringRecord::from(vec!["dateday", "casual", "registered", "count"]);
        let err = CsvColumns::from_headers(&raw).unwrap_err();
        assert_eq!(
            err,
            DashboardError::DataUnavailable("missing required column 'season'".to_string())
        );
    }

    #[test]
    fn test_parse_record() {
        let columns = CsvColumns::from_headers(&headers()).unwrap();
        let row = StringRecord::from(vec!["1", "2011-01-01", "Winter", "2011", "331", "654", "985"]);
        let ride = columns.parse_record(&row, 1).unwrap();
        assert_eq!(
            ride,
            RideRecord::new(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(), 331, 654, Season::Winter)
        );
    }

    #[test]
    fn test_parse_record_rejects_inconsistent_count() {
        let columns = CsvColumns::from_headers(&headers()).unwrap();
        let row = StringRecord::from(vec!["1", "2011-01-01", "Winter", "2011", "331", "654", "986"]);
        let err = columns.parse_record(&row, 7).unwrap_err();
        assert_eq!(
            err,
            DashboardError::DataUnavailable("line 7: count 986 != casual 331 + registered 654".to_string())
        );
    }

    #[test]
    fn test_parse_record_rejects_negative_count() {
        let columns = CsvColumns::from_headers(&headers()).unwrap();
        let row = StringRecord::from(vec!["1", "2011-01-01", "Winter", "2011", "-3", "654", "651"]);
        assert!(columns.parse_record(&row, 1).is_err());
    }

    #[test]
    fn test_parse_record_rejects_bad_date() {
        let columns = CsvColumns::from_headers(&headers()).unwrap();
        let row = StringRecord::from(vec!["1", "not-a-date", "Winter", "2011", "1", "1", "2"]);
        assert!(columns.parse_record(&row, 1).is_err());
    }
}
