use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::Start => f.write_str("start"),
            DateBound::End => f.write_str("end"),
        }
    }
}

// Picks the exit code in the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Upstream,
    EmptyResult,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("you must enter a {bound} date")]
    MissingDate { bound: DateBound },

    #[error("could not parse {bound} date `{input}`: {source}")]
    InvalidDate {
        bound: DateBound,
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("{date} has no midnight in the report time zone")]
    NonexistentMidnight { date: NaiveDate },

    #[error("no Toggl API token configured (use --token, TOGGL_KEY or the config file)")]
    MissingApiToken,

    #[error("could not read config file {}: {}", .path.display(), .message)]
    ConfigFile { path: PathBuf, message: String },

    #[error("time entry request failed: {message}")]
    Http { message: String },

    #[error("time tracking service answered {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("could not decode time entries: {message}")]
    Decode { message: String },

    #[error("could not read entry file {}: {}", .path.display(), .message)]
    EntryFile { path: PathBuf, message: String },

    #[error("cannot round {instant} to the half-hour grid: {message}")]
    Rounding {
        instant: DateTime<Utc>,
        message: String,
    },

    #[error("no days with work found")]
    NoWorkFound,
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::MissingDate { .. }
            | ReportError::InvalidDate { .. }
            | ReportError::InvalidRange { .. }
            | ReportError::NonexistentMidnight { .. }
            | ReportError::MissingApiToken
            | ReportError::ConfigFile { .. } => ErrorKind::Configuration,
            ReportError::Http { .. }
            | ReportError::UpstreamStatus { .. }
            | ReportError::Decode { .. }
            | ReportError::EntryFile { .. }
            | ReportError::Rounding { .. } => ErrorKind::Upstream,
            ReportError::NoWorkFound => ErrorKind::EmptyResult,
        }
    }
}
