use crate::error::ReportError;
use crate::model::date_range::DateRange;
use crate::model::entry::RawEntry;

/// Supplies the raw entries for a range, ordered by start.
pub trait EntrySource {
    fn fetch(&self, range: &DateRange) -> Result<Vec<RawEntry>, ReportError>;
}
