//! Output module for rendering audit reports
//!
//! This module handles:
//! - The full status table of flagged products
//! - The bare list of products without a datasheet
//! - Spreadsheet (CSV) export of the status table

mod csv_export;
mod table;
mod traits;

pub use csv_export::CsvExport;
pub use table::{MissingList, StatusTable};
pub use traits::{OutputError, OutputResult, ReportWriter};

use crate::crawler::AuditReport;
use crate::Result;
use std::io::Write;

/// Shown instead of a report when nothing was flagged or nothing was searched
pub const EMPTY_STATE_MESSAGE: &str = "Нет результатов или не удалось выполнить поиск.";

pub(crate) const ARTICLE_HEADER: &str = "article";
pub(crate) const STATUS_HEADER: &str = "datasheet_status";

/// Selectable report projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Article and status of every flagged product
    #[default]
    Table,
    /// Article codes of products with no usable datasheet
    Missing,
    /// CSV spreadsheet of the status table
    Csv,
}

impl OutputFormat {
    /// Returns the writer implementing this projection
    pub fn writer(&self) -> Box<dyn ReportWriter> {
        match self {
            Self::Table => Box::new(StatusTable),
            Self::Missing => Box::new(MissingList),
            Self::Csv => Box::new(CsvExport),
        }
    }

    /// Whether the projection prints the empty-state message itself
    fn shows_empty_state(&self) -> bool {
        !matches!(self, Self::Csv)
    }
}

/// Renders `report` to `out` in the given format
///
/// A spreadsheet has no place for the empty-state message, so for an empty
/// CSV export the message goes to `notice` while `out` still receives the header.
pub fn write_report(
    report: &AuditReport,
    format: OutputFormat,
    out: &mut dyn Write,
    notice: &mut dyn Write,
) -> Result<()> {
    format.writer().write_report(report, out)?;
    out.flush()?;

    if report.is_empty() && !format.shows_empty_state() {
        writeln!(notice, "{}", EMPTY_STATE_MESSAGE)?;
    }

    Ok(())
}
