//! Spreadsheet export
//!
//! Writes the report as a single-sheet CSV file. A UTF-8 byte order mark is
//! emitted first so spreadsheet applications read the Cyrillic labels correctly.

use crate::crawler::AuditReport;
use crate::output::traits::{OutputResult, ReportWriter};
use crate::output::{ARTICLE_HEADER, STATUS_HEADER};
use std::io::Write;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV spreadsheet of every flagged product
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExport;

impl ReportWriter for CsvExport {
    fn write_report(&self, report: &AuditReport, out: &mut dyn Write) -> OutputResult<()> {
        out.write_all(UTF8_BOM)?;

        let mut writer = csv::Writer::from_writer(out);
        writer.write_record([ARTICLE_HEADER, STATUS_HEADER])?;

        for row in &report.results {
            writer.write_record([row.article.as_str(), row.status.label()])?;
        }

        writer.flush()?;
        Ok(())
    }
}
