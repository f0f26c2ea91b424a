//! Shared utility functions for bike sharing dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Date format used by the dataset and by HTML date inputs: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Short month-year label format, e.g. "Jan-23"
    pub const MONTH_LABEL_FORMAT: &str = "%b-%y";

    /// Timestamp layouts a date column may carry; the time part is dropped.
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Parse a date string in "YYYYMMDD" format
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y%m%d")?)
    }

    /// Parse a date column value, accepting plain dates, full timestamps
    /// and the compact "YYYYMMDD" form. Only the calendar day is kept.
    pub fn parse_date_lenient(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if let Ok(date) = parse_date(s) {
            return Ok(date);
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(datetime.date());
            }
        }
        if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
            return parse_date_compact(s);
        }
        anyhow::bail!("unrecognized date '{}'", s)
    }

    /// Label a calendar month the way the monthly chart axis shows it ("Jan-23").
    ///
    /// Returns `None` for a month outside 1..=12.
    pub fn month_label(year: i32, month: u32) -> Option<String> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.format(MONTH_LABEL_FORMAT).to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_lenient() {
            let expected = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
            assert_eq!(parse_date_lenient("2011-01-01").unwrap(), expected);
            assert_eq!(parse_date_lenient(" 2011-01-01 ").unwrap(), expected);
            assert_eq!(parse_date_lenient("2011-01-01 00:00:00").unwrap(), expected);
            assert_eq!(parse_date_lenient("2011-01-01T13:45:00").unwrap(), expected);
            assert_eq!(parse_date_lenient("20110101").unwrap(), expected);
            assert!(parse_date_lenient("01/01/2011").is_err());
            assert!(parse_date_lenient("").is_err());
        }

        #[test]
        fn test_month_label() {
            assert_eq!(month_label(2023, 1).as_deref(), Some("Jan-23"));
            assert_eq!(month_label(2011, 12).as_deref(), Some("Dec-11"));
            assert_eq!(month_label(2023, 13), None);
        }
    }
}

/// Number formatting for metric display
pub mod numbers {
    /// Format a count with comma thousands separators, e.g. 3292679 -> "3,292,679"
    pub fn format_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

}
