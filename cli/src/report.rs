use std::io::{self, Write};

use anyhow::Result;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use workday_core::ReportRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `date,start,stop,hours,description`, no header
    Csv,
    /// Human readable table with a total line
    Table,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "Stop")]
    stop: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Description")]
    desc: String,
}

pub fn render(rows: &[ReportRow], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Csv => render_csv(rows),
        OutputFormat::Table => render_table(rows),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(rows)?),
    };
    Ok(rendered)
}

pub fn write(rows: &[ReportRow], format: OutputFormat) -> Result<()> {
    let rendered = render(rows, format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn render_csv(rows: &[ReportRow]) -> String {
    rows.iter().map(|row| format!("{}\n", row.to_csv_line())).collect()
}

fn render_table(rows: &[ReportRow]) -> String {
    let total: f64 = rows.iter().map(|r| r.total_hours).sum();

    let mut table_rows: Vec<TableRow> = rows
        .iter()
        .map(|row| TableRow {
            date: row.date.clone(),
            start: row.start_clock(),
            stop: row.stop_clock(),
            hours: row.total_hours.to_string(),
            desc: row.description.clone(),
        })
        .collect();
    table_rows.push(TableRow {
        date: "Total".to_string(),
        start: String::new(),
        stop: String::new(),
        hours: total.to_string(),
        desc: format!("{} day(s)", rows.len()),
    });

    let mut table = Table::new(table_rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    format!("{}\n", table)
}
