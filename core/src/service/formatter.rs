use chrono::TimeZone;

use crate::model::day_summary::DaySummary;
use crate::service::description::merge_descriptions;
use crate::service::dto::ReportRow;

// start and stop are moved into `tz` separately so each gets its own offset
pub fn format_day<Tz: TimeZone>(day: &DaySummary, tz: &Tz) -> ReportRow {
    ReportRow {
        date: day.date_key(),
        start: day.start().with_timezone(tz).fixed_offset(),
        stop: day.stop().with_timezone(tz).fixed_offset(),
        total_hours: day.total_hours(),
        description: merge_descriptions(day.descriptions()),
    }
}

// Rows keep the order of `days`; `DayAggregator::finish` hands them over sorted.
pub fn format_report<Tz: TimeZone>(days: &[DaySummary], tz: &Tz) -> Vec<ReportRow> {
    days.iter().map(|day| format_day(day, tz)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::NormalizedEntry;
    use chrono::{Duration, Utc};
    use chrono_tz::America::New_York;

    fn entry(day: u32, hour: u32, minute: u32, hours: f64, description: &str) -> NormalizedEntry {
        let start = Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap();
        NormalizedEntry {
            start,
            stop: start + Duration::minutes((hours * 60.0) as i64),
            date: start.date_naive(),
            hours,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_row_fields() {
        let mut day = DaySummary::open(entry(1, 9, 0, 1.0, "build feature"));
        day.absorb(entry(1, 13, 0, 2.5, "fix bug"));

        let row = format_day(&day, &Utc);
        assert_eq!(row.date, "2024-01-01");
        assert_eq!(row.total_hours, 3.5);
        assert_eq!(row.stop, row.start + Duration::minutes(210));
        assert_eq!(row.to_csv_line(), "2024-01-01,9:00 am,12:30 pm,3.5,\"build feature, fix bug\"");
    }

    #[test]
    fn test_whole_hours_print_without_fraction() {
        let day = DaySummary::open(entry(1, 14, 30, 2.0, "build feature"));
        assert_eq!(format_day(&day, &Utc).to_string(), "2024-01-01,2:30 pm,4:30 pm,2,build feature");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let mut day = DaySummary::open(entry(1, 9, 0, 1.0, "a"));
        day.absorb(entry(1, 10, 0, 0.5, "b"));

        let first = format_day(&day, &Utc).to_csv_line();
        let second = format_day(&day, &Utc).to_csv_line();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stop_uses_offset_at_stop_instant() {
        // 2024-03-10 in New York: 05:00Z is 12:00 am EST, 09:00Z is 5:00 am EDT
        let start = Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap();
        let day = DaySummary::open(NormalizedEntry {
            start,
            stop: start + Duration::hours(4),
            date: start.with_timezone(&New_York).date_naive(),
            hours: 4.0,
            description: "x".to_string(),
        });

        let row = format_day(&day, &New_York);
        assert_eq!(row.to_csv_line(), "2024-03-10,12:00 am,5:00 am,4,x");
        assert_eq!(row.start.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(row.stop.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_report_keeps_day_order() {
        let days = vec![
            DaySummary::open(entry(1, 9, 0, 1.0, "a")),
            DaySummary::open(entry(3, 9, 0, 1.0, "c")),
        ];
        let dates: Vec<String> = format_report(&days, &Utc).into_iter().map(|r| r.date).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-03"]);
    }
}
