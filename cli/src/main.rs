mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use workday_core::{
    DailyReportUseCase, DateRange, EntrySource, ErrorKind, FileEntrySource, ReportError, ReportRow, Settings,
    TogglConfig, TogglEntrySource,
};

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "workday", version)]
#[command(about = "Daily work-hours report from Toggl time entries", long_about = None)]
struct Cli {
    /// First day of the report (YYYY-MM-DD, local time)
    start: Option<String>,

    /// Day after the last reported day (YYYY-MM-DD, local time)
    end: Option<String>,

    /// Read entries from a JSON dump instead of the Toggl API
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Toggl API token
    #[arg(long, env = "TOGGL_KEY", hide_env_values = true)]
    token: Option<String>,

    /// Toggl API base URL
    #[arg(long, env = "TOGGL_API_URL")]
    api_url: Option<String>,

    /// Only report entries from this workspace
    #[arg(long, env = "TOGGL_WORKSPACE")]
    workspace: Option<i64>,

    /// Config file (default: ~/.workday/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "workday=warn,workday_core=warn",
        1 => "workday=info,workday_core=info",
        _ => "workday=debug,workday_core=debug",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ReportError>().map(ReportError::kind) {
        Some(ErrorKind::Configuration) => ExitCode::from(2),
        Some(ErrorKind::Upstream) => ExitCode::from(3),
        Some(ErrorKind::EmptyResult) => ExitCode::from(4),
        None => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let range = DateRange::parse_local(cli.start.as_deref(), cli.end.as_deref())?;
    debug!(start = %range.start, end = %range.end, "report range");

    let settings = Settings {
        api_token: cli.token,
        api_url: cli.api_url,
        workspace_id: cli.workspace,
    };

    let rows = match cli.file {
        Some(path) => {
            let source = FileEntrySource::new(path).with_workspace(settings.workspace_id);
            build_report(&source, &range)?
        }
        None => {
            let file_settings = Settings::load_or_default(cli.config.as_deref())?;
            let config = TogglConfig::from_settings(settings.or(file_settings))?;
            debug!(?config, "using Toggl");
            let source = TogglEntrySource::new(config)?;
            build_report(&source, &range)?
        }
    };

    report::write(&rows, cli.format).context("could not write report")
}

fn build_report<S: EntrySource>(source: &S, range: &DateRange) -> Result<Vec<ReportRow>> {
    let usecase = DailyReportUseCase::new(source);
    Ok(usecase.run(range)?)
}
