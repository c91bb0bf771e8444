pub mod daily_report;
