pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{Settings, TogglConfig};
pub use error::{DateBound, ErrorKind, ReportError};
pub use model::date_range::DateRange;
pub use model::day_summary::DaySummary;
pub use model::entry::{NormalizedEntry, RawEntry};
pub use repository::{EntrySource, FileEntrySource, TogglEntrySource};
pub use service::aggregator::DayAggregator;
pub use service::description::merge_descriptions;
pub use service::dto::ReportRow;
pub use service::formatter::{format_day, format_report};
pub use service::normalizer::EntryNormalizer;
pub use usecase::daily_report::DailyReportUseCase;
