use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::model::entry::NormalizedEntry;

/// Everything worked on one calendar day.
///
/// The first entry folded in fixes `start`; later entries only add
/// durations and previously unseen descriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    date: NaiveDate,
    start: DateTime<Utc>,
    durations: Vec<f64>,
    descriptions: Vec<String>,
}

impl DaySummary {
    pub fn open(entry: NormalizedEntry) -> Self {
        Self {
            date: entry.date,
            start: entry.start,
            durations: vec![entry.hours],
            descriptions: vec![entry.description],
        }
    }

    pub fn absorb(&mut self, entry: NormalizedEntry) {
        self.durations.push(entry.hours);
        if !self.descriptions.contains(&entry.description) {
            self.descriptions.push(entry.description);
        }
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn total_hours(&self) -> f64 {
        self.durations.iter().sum()
    }

    // whole minutes, added to the absolute start
    pub fn stop(&self) -> DateTime<Utc> {
        let minutes = (self.total_hours() * 60.0) as i64;
        self.start + Duration::minutes(minutes)
    }
}
