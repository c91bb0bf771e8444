use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::info;

use crate::error::ReportError;
use crate::model::date_range::DateRange;
use crate::model::entry::RawEntry;
use crate::repository::toggl::{into_raw_entries, TogglTimeEntry};
use crate::repository::traits::EntrySource;

/// Reads a JSON dump of Toggl time entries, e.g. a saved `/me/time_entries` response.
#[derive(Clone)]
pub struct FileEntrySource {
    file_path: PathBuf,
    workspace_id: Option<i64>,
}

impl FileEntrySource {
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            workspace_id: None,
        }
    }

    pub fn with_workspace(mut self, workspace_id: Option<i64>) -> Self {
        self.workspace_id = workspace_id;
        self
    }

    fn read_entries(&self) -> Result<Vec<TogglTimeEntry>, ReportError> {
        let file = File::open(&self.file_path).map_err(|e| ReportError::EntryFile {
            path: self.file_path.clone(),
            message: e.to_string(),
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| ReportError::Decode { message: e.to_string() })
    }
}

impl EntrySource for FileEntrySource {
    fn fetch(&self, range: &DateRange) -> Result<Vec<RawEntry>, ReportError> {
        let entries = self.read_entries()?;
        info!(path = %self.file_path.display(), count = entries.len(), "read time entries");

        let mut raw = into_raw_entries(entries, self.workspace_id);
        raw.retain(|e| range.contains(e.start));
        Ok(raw)
    }
}
