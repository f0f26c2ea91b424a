//! Filtering, aggregation and summary metrics for bike sharing data.
//!
//! This crate turns the immutable Base Table into what the dashboard shows
//! for a selected date range: three headline metrics, a monthly summary for
//! the trend line, and a long-form seasonal summary for the bar chart.
//!
//! # Usage
//!
//! ```rust
//! use bks_core::base_table::BaseTable;
//! use bks_data::view::DashboardView;
//! use chrono::NaiveDate;
//!
//! let table = BaseTable::from_csv(
//!     "dateday,casual,registered,count,season\n\
//!      2023-01-05,10,40,50,Winter\n\
//!      2023-02-10,5,15,20,Winter\n",
//! )
//! .unwrap();
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
//! let view = DashboardView::compute(&table, start, end);
//!
//! assert_eq!(view.metrics.total_rides, 70);
//! assert_eq!(view.monthly[0].year_month, "Jan-23");
//! assert_eq!(view.seasonal[1].rider_count, 55);
//! ```

pub mod aggregate;
pub mod chart;
pub mod filter;
pub mod view;
