use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::time::format_clock;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub start: DateTime<FixedOffset>,
    pub stop: DateTime<FixedOffset>,
    pub total_hours: f64,
    pub description: String,
}

impl ReportRow {
    pub fn start_clock(&self) -> String {
        format_clock(&self.start)
    }

    pub fn stop_clock(&self) -> String {
        format_clock(&self.stop)
    }

    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.date,
            self.start_clock(),
            self.stop_clock(),
            self.total_hours,
            self.description
        )
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv_line())
    }
}
