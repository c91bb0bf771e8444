use chrono::{DateTime, Duration, DurationRound, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{DateBound, ReportError};

pub const ROUNDING_GRID_MINUTES: i64 = 30;

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const CLOCK_FORMAT: &str = "%-I:%M %P";

/// Parses a `YYYY-MM-DD` range bound. Blank input counts as missing.
pub fn parse_report_date(input: &str, bound: DateBound) -> Result<NaiveDate, ReportError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ReportError::MissingDate { bound });
    }

    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT).map_err(|source| ReportError::InvalidDate {
        bound,
        input: input.to_string(),
        source,
    })
}

// earliest mapping wins when midnight falls in a DST gap
pub fn midnight_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>, ReportError> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(ReportError::NonexistentMidnight { date })
}

/// Snaps an absolute instant to the nearest half hour; exact ties round up.
pub fn round_to_grid(instant: DateTime<Utc>) -> Result<DateTime<Utc>, ReportError> {
    instant
        .duration_round(Duration::minutes(ROUNDING_GRID_MINUTES))
        .map_err(|e| ReportError::Rounding {
            instant,
            message: e.to_string(),
        })
}

pub fn hours_between(start: DateTime<Utc>, stop: DateTime<Utc>) -> f64 {
    stop.signed_duration_since(start).num_seconds() as f64 / 3600.0
}

/// 12-hour wall clock with a lowercase marker, e.g. `9:00 am`.
pub fn format_clock<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format(CLOCK_FORMAT).to_string()
}
