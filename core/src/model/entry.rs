use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub start: DateTime<Utc>,
    pub stop: Option<DateTime<Utc>>,
    // seconds, negative while running
    pub duration_secs: i64,
    pub description: String,
}

impl RawEntry {
    pub fn new(start: DateTime<Utc>, stop: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            start,
            stop: Some(stop),
            duration_secs: stop.signed_duration_since(start).num_seconds(),
            description: description.into(),
        }
    }

    // Toggl encodes a running timer as `-start_epoch`
    pub fn running(start: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            start,
            stop: None,
            duration_secs: -start.timestamp(),
            description: description.into(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.duration_secs < 0 || self.stop.is_none()
    }
}

/// A finished entry on the half-hour grid. `date` is the local day of `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEntry {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}
