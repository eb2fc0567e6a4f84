//! Pagination navigation
//!
//! Listing pages carry an optional pagination control whose entries include a
//! "previous" and a "next" control around the numbered pages.

use crate::config::SiteSelectors;
use crate::crawler::parser::resolve_href;
use scraper::Html;
use url::Url;

/// Number of pagination entries that are navigation controls rather than pages
const NAVIGATION_CONTROLS: usize = 2;

/// Finds the "next page" link and resolves it against the base URL
///
/// # Returns
///
/// * `Some(Url)` - The next listing page
/// * `None` - No pagination control, no next link, or a next link without href
pub fn next_page_url(html: &str, base_url: &Url, selectors: &SiteSelectors) -> Option<Url> {
    let document = Html::parse_document(html);
    let pagination = document.select(&selectors.pagination).next()?;

    pagination
        .select(&selectors.anchor)
        .find(|link| link.text().collect::<String>().trim() == selectors.next_page_label)
        .and_then(|link| link.value().attr("href"))
        .and_then(|href| resolve_href(href, base_url))
}

/// Counts the listing pages advertised by the first page
///
/// The pagination entries minus the previous/next controls; a page without a
/// pagination control is the only page. Never less than one.
pub fn count_total_pages(html: &str, selectors: &SiteSelectors) -> usize {
    let document = Html::parse_document(html);

    match document.select(&selectors.pagination).next() {
        Some(pagination) => pagination
            .select(&selectors.pagination_item)
            .count()
            .saturating_sub(NAVIGATION_CONTROLS)
            .max(1),
        None => 1,
    }
}
