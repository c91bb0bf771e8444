use chrono::{Local, TimeZone};
use tracing::debug;

use crate::error::ReportError;
use crate::model::entry::{NormalizedEntry, RawEntry};
use crate::time::{hours_between, round_to_grid};

/// Snaps raw entries to the half-hour grid and dates them in the report time zone.
#[derive(Debug, Clone)]
pub struct EntryNormalizer<Tz: TimeZone> {
    tz: Tz,
}

impl EntryNormalizer<Local> {
    pub fn local() -> Self {
        Self { tz: Local }
    }
}

impl<Tz: TimeZone> EntryNormalizer<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns `Ok(None)` for entries whose timer is still running.
    ///
    /// Start and stop are rounded separately and the duration is taken
    /// between the rounded endpoints.
    pub fn normalize(&self, entry: &RawEntry) -> Result<Option<NormalizedEntry>, ReportError> {
        let stop = match entry.stop {
            Some(stop) if !entry.is_running() => stop,
            _ => {
                debug!(start = %entry.start, description = %entry.description, "skipping running entry");
                return Ok(None);
            }
        };

        let start = round_to_grid(entry.start)?;
        let stop = round_to_grid(stop)?;

        Ok(Some(NormalizedEntry {
            start,
            stop,
            date: start.with_timezone(&self.tz).date_naive(),
            hours: hours_between(start, stop),
            description: entry.description.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

    fn at(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, h, m, 0).unwrap()
    }

    #[test]
    fn test_rounds_both_endpoints() {
        let normalizer = EntryNormalizer::new(Utc);
        let entry = RawEntry::new(at(1, 9, 7), at(1, 9, 52), "build feature");

        let normalized = normalizer.normalize(&entry).unwrap().unwrap();
        assert_eq!(normalized.start, at(1, 9, 0));
        assert_eq!(normalized.stop, at(1, 10, 0));
        assert_eq!(normalized.hours, 1.0);
        assert_eq!(normalized.description, "build feature");
    }

    #[test]
    fn test_duration_comes_from_rounded_endpoints() {
        // 20 raw minutes straddling a boundary become a full half hour
        let normalizer = EntryNormalizer::new(Utc);
        let entry = RawEntry::new(at(1, 9, 20), at(1, 9, 40), "standup");

        let normalized = normalizer.normalize(&entry).unwrap().unwrap();
        assert_eq!(normalized.hours, 0.5);
    }

    #[test]
    fn test_running_entry_skipped() {
        let normalizer = EntryNormalizer::new(Utc);
        let entry = RawEntry::running(at(1, 9, 0), "still going");
        assert_eq!(normalizer.normalize(&entry).unwrap(), None);

        let mut negative = RawEntry::new(at(1, 9, 0), at(1, 10, 0), "odd");
        negative.duration_secs = -1;
        assert_eq!(normalizer.normalize(&negative).unwrap(), None);
    }

    #[test]
    fn test_description_kept_verbatim() {
        let normalizer = EntryNormalizer::new(Utc);
        let entry = RawEntry::new(at(1, 9, 0), at(1, 10, 0), "  Fix Bug ");
        let normalized = normalizer.normalize(&entry).unwrap().unwrap();
        assert_eq!(normalized.description, "  Fix Bug ");
    }

    #[test]
    fn test_date_follows_report_time_zone() {
        // 23:10Z rounds to 23:00Z: still Jan 1 in UTC, already Jan 2 at +01:00
        let entry = RawEntry::new(at(1, 23, 10), at(2, 0, 40), "late");

        let in_utc = EntryNormalizer::new(Utc).normalize(&entry).unwrap().unwrap();
        assert_eq!(in_utc.start, at(1, 23, 0));
        assert_eq!(in_utc.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let shifted = EntryNormalizer::new(plus_one).normalize(&entry).unwrap().unwrap();
        assert_eq!(shifted.start, at(1, 23, 0));
        assert_eq!(shifted.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}
