pub mod date_range;
pub mod day_summary;
pub mod entry;
