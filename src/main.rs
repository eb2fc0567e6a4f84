//! Datasheet-Audit main entry point
//!
//! This is the command-line interface for the datasheet auditor.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use datasheet_audit::config::load_config_or_default;
use datasheet_audit::crawler::{AuditReport, Coordinator, CrawlProgress, ProgressReporter};
use datasheet_audit::input::AuditInput;
use datasheet_audit::output::{self, OutputFormat, EMPTY_STATE_MESSAGE};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Datasheet-Audit: finds missing and outdated datasheets
///
/// Walks every page of a catalogue search or category listing, follows each
/// documented product to its detail page and reports products whose datasheet
/// is missing or does not follow the current naming convention.
#[derive(Parser, Debug)]
#[command(name = "datasheet-audit")]
#[command(version)]
#[command(about = "Finds missing and outdated datasheets", long_about = None)]
struct Cli {
    /// Free-text search query
    #[arg(short = 's', long, conflicts_with = "category_url")]
    query: Option<String>,

    /// Category listing URL to audit instead of a search
    #[arg(short = 'c', long, value_name = "URL")]
    category_url: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report projection
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Article and status of every flagged product
    Table,
    /// Article codes lacking a datasheet, one per line
    Missing,
    /// CSV spreadsheet
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputFormat::Table,
            Format::Missing => OutputFormat::Missing,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let input = match (cli.query, cli.category_url) {
        (_, Some(url)) => AuditInput::Category(url),
        (Some(query), None) => AuditInput::Query(query),
        (None, None) => AuditInput::Query(String::new()),
    };

    let coordinator = Coordinator::new(config)?;
    let show_progress = !cli.no_progress && !cli.quiet;
    let reporter = BarReporter::new(show_progress);

    let report = match coordinator.audit(&input, &reporter).await {
        Ok(report) => report,
        Err(e) => {
            reporter.abandon();
            tracing::error!("Audit failed: {}", e);
            eprintln!("{}", EMPTY_STATE_MESSAGE);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "{} page(s), {} product(s), {} flagged",
        report.pages,
        report.products,
        report.results.len()
    );

    write_report(&report, cli.format.into(), cli.output.as_deref())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("datasheet_audit=warn,warn"),
            1 => EnvFilter::new("datasheet_audit=info,warn"),
            2 => EnvFilter::new("datasheet_audit=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Renders the report to `path`, or stdout when no path is given
fn write_report(
    report: &AuditReport,
    format: OutputFormat,
    path: Option<&Path>,
) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            output::write_report(report, format, &mut out, &mut io::stderr())?;
            eprintln!(
                "Report written to {} ({} row(s), started {})",
                path.display(),
                report.results.len(),
                report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            output::write_report(report, format, &mut out, &mut io::stderr())?;
        }
    }

    Ok(())
}

/// Drives a terminal progress bar from crawl progress
struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }

    fn abandon(&self) {
        self.bar.abandon();
    }
}

impl ProgressReporter for BarReporter {
    fn on_start(&self, total_pages: usize) {
        self.bar.set_length(total_pages as u64);
    }

    fn on_page(&self, progress: &CrawlProgress) {
        // The advertised total can be lower than the real page count
        if progress.current_page > progress.total_pages {
            self.bar.set_length(progress.current_page as u64);
        }
        self.bar.set_position(progress.current_page as u64);
        self.bar.set_message(format!(
            "Обработано страниц: {}/{}. Осталось примерно {:.1} секунд.",
            progress.current_page,
            progress.total_pages,
            progress.estimated_remaining().as_secs_f64()
        ));
    }

    fn on_finish(&self, _progress: &CrawlProgress) {
        self.bar.finish_with_message("Готово!");
    }
}
