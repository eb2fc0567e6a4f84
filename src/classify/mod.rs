//! Datasheet classification
//!
//! Decides, per product, whether the report should flag it. Only problems are
//! reported: a product whose datasheet follows the current naming convention
//! produces no result at all.

use crate::crawler::ProductRecord;
use std::fmt;
use url::Url;

/// Problem found for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasheetStatus {
    /// No documentation indicator, or no retrievable datasheet link
    Missing,
    /// A datasheet exists but its filename does not follow the current convention
    Outdated,
}

impl DatasheetStatus {
    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "отсутствует",
            Self::Outdated => "устаревший",
        }
    }
}

impl fmt::Display for DatasheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the audit report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub article: String,
    pub status: DatasheetStatus,
}

/// Classifies a product given its resolved datasheet URL
///
/// | Indicator | Datasheet | Filename prefix | Result |
/// |-----------|-----------|-----------------|--------|
/// | absent | any | any | Missing |
/// | present | none | - | Missing |
/// | present | some | other | Outdated |
/// | present | some | `current_prefix` | no result |
///
/// The prefix is tested against the last path segment of the datasheet URL.
///
/// # Example
///
/// ```
/// use datasheet_audit::classify::{classify, DatasheetStatus};
/// use datasheet_audit::crawler::ProductRecord;
/// use url::Url;
///
/// let record = ProductRecord {
///     article: "ABC123".to_string(),
///     has_documentation: true,
///     detail_url: None,
/// };
/// let old = Url::parse("https://example.com/files/old_ABC123.pdf").unwrap();
///
/// let result = classify(&record, Some(&old), "Datasheet-").unwrap();
/// assert_eq!(result.status, DatasheetStatus::Outdated);
/// ```
pub fn classify(
    record: &ProductRecord,
    datasheet: Option<&Url>,
    current_prefix: &str,
) -> Option<ClassificationResult> {
    let status = match (record.has_documentation, datasheet) {
        (false, _) | (true, None) => DatasheetStatus::Missing,
        (true, Some(url)) => {
            if datasheet_filename(url).starts_with(current_prefix) {
                return None;
            }
            DatasheetStatus::Outdated
        }
    };

    Some(ClassificationResult {
        article: record.article.clone(),
        status,
    })
}

/// Returns the last path segment of a datasheet URL
fn datasheet_filename(url: &Url) -> &str {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("")
}
