//! Datasheet resolution
//!
//! Follows a product's detail page to the datasheet asset it links to. All
//! lookups for one listing page run concurrently and are joined before the
//! page is classified.

use crate::config::SiteSelectors;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::{resolve_href, ProductRecord};
use crate::AuditError;
use futures::future::try_join_all;
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Extracts the datasheet link from a detail page
///
/// The href is resolved against the crawl's base URL, not the detail page.
pub fn extract_datasheet_link(html: &str, base_url: &Url, selectors: &SiteSelectors) -> Option<Url> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.datasheet_link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(|href| resolve_href(href, base_url))
}

/// Fetches a detail page and returns its datasheet URL, if any
pub async fn resolve_datasheet(
    client: &Client,
    detail_url: &Url,
    base_url: &Url,
    selectors: &SiteSelectors,
) -> Result<Option<Url>, AuditError> {
    let html = fetch_page(client, detail_url).await?;
    let datasheet = extract_datasheet_link(&html, base_url, selectors);

    tracing::debug!(
        "Datasheet for {}: {}",
        detail_url,
        datasheet.as_ref().map(Url::as_str).unwrap_or("none")
    );

    Ok(datasheet)
}

/// Resolves the datasheets of every documented product on a listing page
///
/// Lookups are issued together and all must finish; the first failure aborts
/// the batch. Products without documentation or without a detail link are not
/// fetched.
///
/// # Returns
///
/// One entry per record, in the same order as `records` regardless of which
/// lookup finished first.
pub async fn resolve_datasheets(
    client: &Client,
    records: &[ProductRecord],
    base_url: &Url,
    selectors: &SiteSelectors,
) -> Result<Vec<Option<Url>>, AuditError> {
    let lookups = records.iter().map(|record| async move {
        match (&record.detail_url, record.has_documentation) {
            (Some(detail_url), true) => {
                resolve_datasheet(client, detail_url, base_url, selectors).await
            }
            _ => Ok(None),
        }
    });

    try_join_all(lookups).await
}
