use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ReportError;

pub const DEFAULT_API_URL: &str = "https://api.track.toggl.com/api/v9";

const CONFIG_DIR_NAME: &str = ".workday";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api_token: Option<String>,
    pub api_url: Option<String>,
    pub workspace_id: Option<i64>,
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ReportError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// An explicit path must exist. The default path is optional.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ReportError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading config file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            api_token: non_blank(self.api_token).or_else(|| non_blank(fallback.api_token)),
            api_url: non_blank(self.api_url).or_else(|| non_blank(fallback.api_url)),
            workspace_id: self.workspace_id.or(fallback.workspace_id),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Connection settings for the Toggl source, built once at startup.
#[derive(Clone, PartialEq)]
pub struct TogglConfig {
    pub api_token: String,
    pub base_url: String,
    pub workspace_id: Option<i64>,
}

impl TogglConfig {
    pub fn from_settings(settings: Settings) -> Result<Self, ReportError> {
        let api_token = non_blank(settings.api_token).ok_or(ReportError::MissingApiToken)?;
        let base_url = non_blank(settings.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            workspace_id: settings.workspace_id,
        })
    }
}

impl fmt::Debug for TogglConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglConfig")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("workspace_id", &self.workspace_id)
            .finish()
    }
}
