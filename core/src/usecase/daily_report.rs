use chrono::{Local, TimeZone};
use tracing::info;

use crate::error::ReportError;
use crate::model::date_range::DateRange;
use crate::model::day_summary::DaySummary;
use crate::model::entry::RawEntry;
use crate::repository::EntrySource;
use crate::service::aggregator::DayAggregator;
use crate::service::dto::ReportRow;
use crate::service::formatter::format_report;
use crate::service::normalizer::EntryNormalizer;

/// Builds the per-day report for a date range from an [`EntrySource`].
pub struct DailyReportUseCase<'a, S: EntrySource, Tz: TimeZone> {
    source: &'a S,
    tz: Tz,
    normalizer: EntryNormalizer<Tz>,
}

impl<'a, S: EntrySource> DailyReportUseCase<'a, S, Local> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            tz: Local,
            normalizer: EntryNormalizer::local(),
        }
    }
}

impl<'a, S: EntrySource, Tz: TimeZone> DailyReportUseCase<'a, S, Tz> {
    pub fn with_time_zone(source: &'a S, tz: Tz) -> Self {
        Self {
            source,
            normalizer: EntryNormalizer::new(tz.clone()),
            tz,
        }
    }

    pub fn run(&self, range: &DateRange) -> Result<Vec<ReportRow>, ReportError> {
        let entries = self.source.fetch(range)?;
        self.report_from_entries(&entries)
    }

    pub fn report_from_entries(&self, entries: &[RawEntry]) -> Result<Vec<ReportRow>, ReportError> {
        let days = self.summarize(entries)?;
        let rows = format_report(&days, &self.tz);

        let total: f64 = rows.iter().map(|r| r.total_hours).sum();
        info!(days = rows.len(), total_hours = total, "report ready");
        Ok(rows)
    }

    pub fn summarize(&self, entries: &[RawEntry]) -> Result<Vec<DaySummary>, ReportError> {
        let mut aggregator = DayAggregator::new();
        for entry in entries {
            if let Some(normalized) = self.normalizer.normalize(entry)? {
                aggregator.add(normalized);
            }
        }
        aggregator.finish()
    }
}
