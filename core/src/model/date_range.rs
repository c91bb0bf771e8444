use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::error::{DateBound, ReportError};
use crate::time::{midnight_in, parse_report_date};

/// Calendar dates bounding a report, resolved to instants in the report time zone.
///
/// The range runs from local midnight of `start_date` up to, but excluding,
/// local midnight of `end_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new_in<Tz: TimeZone>(start_date: NaiveDate, end_date: NaiveDate, tz: &Tz) -> Result<Self, ReportError> {
        if end_date < start_date {
            return Err(ReportError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
            start: midnight_in(start_date, tz)?,
            end: midnight_in(end_date, tz)?,
        })
    }

    pub fn parse_in<Tz: TimeZone>(start: Option<&str>, end: Option<&str>, tz: &Tz) -> Result<Self, ReportError> {
        let start = start.ok_or(ReportError::MissingDate { bound: DateBound::Start })?;
        let end = end.ok_or(ReportError::MissingDate { bound: DateBound::End })?;
        let start_date = parse_report_date(start, DateBound::Start)?;
        let end_date = parse_report_date(end, DateBound::End)?;
        Self::new_in(start_date, end_date, tz)
    }

    pub fn parse_local(start: Option<&str>, end: Option<&str>) -> Result<Self, ReportError> {
        Self::parse_in(start, end, &Local)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}
