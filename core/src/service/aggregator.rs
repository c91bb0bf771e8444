use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ReportError;
use crate::model::day_summary::DaySummary;
use crate::model::entry::NormalizedEntry;

/// Folds normalized entries into one [`DaySummary`] per local calendar date.
///
/// Within a day the first entry seen sets the start time, so callers should
/// feed entries ordered by start.
#[derive(Debug, Default)]
pub struct DayAggregator {
    days: BTreeMap<NaiveDate, DaySummary>,
}

impl DayAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: NormalizedEntry) {
        match self.days.entry(entry.date) {
            Entry::Vacant(slot) => {
                debug!(date = %slot.key(), start = %entry.start, "new day");
                slot.insert(DaySummary::open(entry));
            }
            Entry::Occupied(mut slot) => slot.get_mut().absorb(entry),
        }
    }

    /// Days in ascending date order. Fails with [`ReportError::NoWorkFound`] when empty.
    pub fn finish(self) -> Result<Vec<DaySummary>, ReportError> {
        if self.days.is_empty() {
            return Err(ReportError::NoWorkFound);
        }
        Ok(self.days.into_values().collect())
    }
}

impl Extend<NormalizedEntry> for DayAggregator {
    fn extend<I: IntoIterator<Item = NormalizedEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn entry(day: u32, hour: u32, hours: f64, description: &str) -> NormalizedEntry {
        let start = Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap();
        NormalizedEntry {
            start,
            stop: start + Duration::minutes((hours * 60.0) as i64),
            date: start.date_naive(),
            hours,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_same_day_entries_collapse() {
        let mut aggregator = DayAggregator::new();
        aggregator.add(entry(1, 9, 1.0, "build feature"));
        aggregator.add(entry(1, 13, 2.5, "build feature"));

        let days = aggregator.finish().unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].durations().len(), 2);
        assert_eq!(days[0].descriptions(), &["build feature"]);
    }

    #[test]
    fn test_days_sorted_by_date() {
        let mut aggregator = DayAggregator::new();
        aggregator.extend(vec![
            entry(3, 9, 1.0, "later"),
            entry(1, 9, 1.0, "earlier"),
            entry(2, 9, 1.0, "middle"),
        ]);

        let keys: Vec<String> = aggregator.finish().unwrap().iter().map(|d| d.date_key()).collect();
        assert_eq!(keys, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_first_seen_entry_sets_start() {
        let mut aggregator = DayAggregator::new();
        aggregator.add(entry(1, 14, 1.0, "afternoon"));
        aggregator.add(entry(1, 9, 1.0, "morning"));

        let days = aggregator.finish().unwrap();
        assert_eq!(days[0].start(), entry(1, 14, 1.0, "").start);
        assert_eq!(days[0].descriptions(), &["afternoon", "morning"]);
    }

    #[test]
    fn test_empty_is_an_error() {
        let aggregator = DayAggregator::new();
        assert!(matches!(aggregator.finish(), Err(ReportError::NoWorkFound)));
    }
}
