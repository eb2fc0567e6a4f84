//! Output writer trait and errors

use crate::crawler::AuditReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Renders an audit report in one output format
pub trait ReportWriter {
    /// Writes the report to `out`
    fn write_report(&self, report: &AuditReport, out: &mut dyn Write) -> OutputResult<()>;
}
