//! Plain-text report projections

use crate::classify::DatasheetStatus;
use crate::crawler::AuditReport;
use crate::output::traits::{OutputResult, ReportWriter};
use crate::output::{ARTICLE_HEADER, EMPTY_STATE_MESSAGE, STATUS_HEADER};
use std::io::Write;

/// Two-column table of every flagged product, columns sized to their content
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusTable;

impl ReportWriter for StatusTable {
    fn write_report(&self, report: &AuditReport, out: &mut dyn Write) -> OutputResult<()> {
        if report.is_empty() {
            writeln!(out, "{}", EMPTY_STATE_MESSAGE)?;
            return Ok(());
        }

        let article_width = report
            .results
            .iter()
            .map(|row| row.article.chars().count())
            .chain(std::iter::once(ARTICLE_HEADER.chars().count()))
            .max()
            .unwrap_or(0);
        let status_width = report
            .results
            .iter()
            .map(|row| row.status.label().chars().count())
            .chain(std::iter::once(STATUS_HEADER.chars().count()))
            .max()
            .unwrap_or(0);

        writeln!(
            out,
            "{:<aw$}  {:<sw$}",
            ARTICLE_HEADER,
            STATUS_HEADER,
            aw = article_width,
            sw = status_width
        )?;
        writeln!(
            out,
            "{}  {}",
            "-".repeat(article_width),
            "-".repeat(status_width)
        )?;

        for row in &report.results {
            writeln!(
                out,
                "{:<aw$}  {}",
                row.article,
                row.status,
                aw = article_width
            )?;
        }

        Ok(())
    }
}

/// Article codes of products with no usable datasheet, one per line
#[derive(Debug, Default, Clone, Copy)]
pub struct MissingList;

impl ReportWriter for MissingList {
    fn write_report(&self, report: &AuditReport, out: &mut dyn Write) -> OutputResult<()> {
        let mut missing = report
            .results
            .iter()
            .filter(|row| row.status == DatasheetStatus::Missing)
            .peekable();

        if missing.peek().is_none() {
            writeln!(out, "{}", EMPTY_STATE_MESSAGE)?;
            return Ok(());
        }

        for row in missing {
            writeln!(out, "{}", row.article)?;
        }

        Ok(())
    }
}
