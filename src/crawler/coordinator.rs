//! Crawler coordinator - main audit orchestration logic
//!
//! This module contains the page loop that coordinates one audit run:
//! - Building the HTTP client shared by the run
//! - Counting the advertised listing pages
//! - Parsing each listing page and resolving its datasheets
//! - Classifying products and collecting the report
//! - Following the "next page" link until there is none

use crate::classify::{classify, ClassificationResult};
use crate::config::{Config, SiteSelectors};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::pagination::{count_total_pages, next_page_url};
use crate::crawler::parser::parse_listing;
use crate::crawler::progress::{CrawlProgress, ProgressReporter};
use crate::crawler::resolver::resolve_datasheets;
use crate::input::AuditInput;
use crate::{AuditError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use url::Url;

/// Outcome of one audit run
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// First listing page, or None when the input was blank
    pub start_url: Option<Url>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Listing pages processed
    pub pages: usize,

    /// Product records seen across all pages
    pub products: usize,

    /// Problem products in crawl order; duplicates across pages are kept
    pub results: Vec<ClassificationResult>,
}

impl AuditReport {
    /// Report for a run that issued no requests
    pub fn empty() -> Self {
        Self {
            start_url: None,
            started_at: Utc::now(),
            pages: 0,
            products: 0,
            results: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Main audit coordinator structure
pub struct Coordinator {
    config: Config,
    selectors: SiteSelectors,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Selectors compiled
    /// * `Err(AuditError)` - A configured selector is invalid
    pub fn new(config: Config) -> Result<Self> {
        let selectors = SiteSelectors::compile(&config.markers)?;
        Ok(Self { config, selectors })
    }

    /// Audits the listing that `input` resolves to
    ///
    /// A blank input yields an empty report without any request.
    pub async fn audit(
        &self,
        input: &AuditInput,
        reporter: &dyn ProgressReporter,
    ) -> Result<AuditReport> {
        match input.start_url(&self.config.site)? {
            Some(start_url) => self.run(&start_url, reporter).await,
            None => {
                tracing::info!("Empty input, nothing to audit");
                Ok(AuditReport::empty())
            }
        }
    }

    /// Runs the page loop from `start_url`
    ///
    /// The start URL is also the base for every relative link. Any fetch or
    /// parse failure aborts the run and no partial report is returned.
    pub async fn run(
        &self,
        start_url: &Url,
        reporter: &dyn ProgressReporter,
    ) -> Result<AuditReport> {
        tracing::info!("Starting audit at {}", start_url);
        let started_at = Utc::now();

        // One client (and connection pool) per run, dropped when the run ends
        let client = build_http_client(&self.config.user_agent, &self.config.http).map_err(
            |source| AuditError::Http {
                url: start_url.to_string(),
                source,
            },
        )?;

        let mut html = fetch_page(&client, start_url).await?;
        let total_pages = count_total_pages(&html, &self.selectors);
        reporter.on_start(total_pages);

        let mut progress = CrawlProgress::new(total_pages);
        let mut visited = HashSet::from([start_url.clone()]);
        let mut products = 0;
        let mut results = Vec::new();

        loop {
            let records = parse_listing(&html, start_url, &self.selectors)?;
            let datasheets =
                resolve_datasheets(&client, &records, start_url, &self.selectors).await?;

            let page_results: Vec<ClassificationResult> = records
                .iter()
                .zip(&datasheets)
                .filter_map(|(record, datasheet)| {
                    classify(
                        record,
                        datasheet.as_ref(),
                        &self.selectors.current_datasheet_prefix,
                    )
                })
                .collect();

            progress.advance();
            tracing::info!(
                "Page {}: {} products, {} flagged",
                progress.current_page,
                records.len(),
                page_results.len()
            );
            products += records.len();
            results.extend(page_results);
            reporter.on_page(&progress);

            let Some(next_url) = next_page_url(&html, start_url, &self.selectors) else {
                break;
            };

            if !visited.insert(next_url.clone()) {
                tracing::warn!("Pagination loops back to {}, stopping", next_url);
                break;
            }

            html = fetch_page(&client, &next_url).await?;
        }

        reporter.on_finish(&progress);

        Ok(AuditReport {
            start_url: Some(start_url.clone()),
            started_at,
            pages: progress.current_page,
            products,
            results,
        })
    }
}

/// Runs a complete audit with the given configuration
///
/// # Example
///
/// ```no_run
/// use datasheet_audit::config::Config;
/// use datasheet_audit::crawler::{audit, LogReporter};
/// use datasheet_audit::input::AuditInput;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let input = AuditInput::Query("LM317".to_string());
/// let report = audit(Config::default(), &input, &LogReporter).await?;
/// for row in &report.results {
///     println!("{}\t{}", row.article, row.status);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn audit(
    config: Config,
    input: &AuditInput,
    reporter: &dyn ProgressReporter,
) -> Result<AuditReport> {
    Coordinator::new(config)?.audit(input, reporter).await
}
