pub mod base_table;
pub mod date_range;
pub mod error;
pub mod ride_record;
pub mod season;
pub mod source;
