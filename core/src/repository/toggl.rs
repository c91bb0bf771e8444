use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TogglConfig;
use crate::error::ReportError;
use crate::model::date_range::DateRange;
use crate::model::entry::RawEntry;
use crate::repository::traits::EntrySource;

/// A time entry as the Toggl Track v9 API serializes it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TogglTimeEntry {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub workspace_id: Option<i64>,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub stop: Option<DateTime<Utc>>,
    pub duration: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<TogglTimeEntry> for RawEntry {
    fn from(entry: TogglTimeEntry) -> Self {
        RawEntry {
            start: entry.start,
            stop: entry.stop,
            duration_secs: entry.duration,
            description: entry.description.unwrap_or_default(),
        }
    }
}

pub(crate) fn into_raw_entries(entries: Vec<TogglTimeEntry>, workspace_id: Option<i64>) -> Vec<RawEntry> {
    let mut raw: Vec<RawEntry> = entries
        .into_iter()
        .filter(|e| workspace_id.is_none() || e.workspace_id == workspace_id)
        .map(RawEntry::from)
        .collect();
    raw.sort_by_key(|e| e.start);
    raw
}

pub struct TogglEntrySource {
    config: TogglConfig,
    http_client: reqwest::blocking::Client,
}

impl TogglEntrySource {
    pub fn new(config: TogglConfig) -> Result<Self, ReportError> {
        let http_client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ReportError::Http { message: e.to_string() })?;

        Ok(Self { config, http_client })
    }

    fn entries_url(&self) -> String {
        format!("{}/me/time_entries", self.config.base_url)
    }
}

impl EntrySource for TogglEntrySource {
    fn fetch(&self, range: &DateRange) -> Result<Vec<RawEntry>, ReportError> {
        let url = self.entries_url();
        let start = range.start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end = range.end.to_rfc3339_opts(SecondsFormat::Secs, true);
        info!(%url, %start, %end, "fetching time entries");

        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.config.api_token, Some("api_token"))
            .query(&[("start_date", start.as_str()), ("end_date", end.as_str())])
            .send()
            .map_err(|e| ReportError::Http { message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReportError::UpstreamStatus {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let entries: Vec<TogglTimeEntry> = response
            .json()
            .map_err(|e| ReportError::Decode { message: e.to_string() })?;
        debug!(count = entries.len(), "received time entries");

        Ok(into_raw_entries(entries, self.config.workspace_id))
    }
}
