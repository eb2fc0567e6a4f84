//! Listing page parser
//!
//! This module extracts product records from one page of search or category
//! results:
//! - The manufacturer article code of each product
//! - Whether the product advertises documentation
//! - The product's detail page, for products that do

use crate::config::SiteSelectors;
use crate::AuditError;
use scraper::{ElementRef, Html};
use url::Url;

/// One product found on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    /// Manufacturer article code
    pub article: String,

    /// Whether the listing marks the product as having documentation
    pub has_documentation: bool,

    /// Absolute detail page URL; only looked up when `has_documentation` is set
    pub detail_url: Option<Url>,
}

/// Parses a listing page into product records, in document order
///
/// # Arguments
///
/// * `html` - The listing page markup
/// * `base_url` - The base URL for resolving relative detail links
/// * `selectors` - The compiled markup markers
///
/// # Returns
///
/// * `Ok(Vec<ProductRecord>)` - One record per product container
/// * `Err(AuditError::HtmlParse)` - A product container has no article label
///
/// # Example
///
/// ```
/// use datasheet_audit::config::{MarkerConfig, SiteSelectors};
/// use datasheet_audit::crawler::parse_listing;
/// use url::Url;
///
/// let html = r#"<div class="b-product-list__item">
///     <div class="product-model">Артикул производителя: LM317T</div>
/// </div>"#;
/// let selectors = SiteSelectors::compile(&MarkerConfig::default()).unwrap();
/// let base = Url::parse("https://example.com/search/").unwrap();
///
/// let records = parse_listing(html, &base, &selectors).unwrap();
/// assert_eq!(records[0].article, "LM317T");
/// assert!(!records[0].has_documentation);
/// ```
pub fn parse_listing(
    html: &str,
    base_url: &Url,
    selectors: &SiteSelectors,
) -> Result<Vec<ProductRecord>, AuditError> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.product)
        .enumerate()
        .map(|(index, item)| parse_product(item, index, base_url, selectors))
        .collect()
}

/// Extracts a single product record from its container element
fn parse_product(
    item: ElementRef<'_>,
    index: usize,
    base_url: &Url,
    selectors: &SiteSelectors,
) -> Result<ProductRecord, AuditError> {
    let label = item
        .select(&selectors.article_label)
        .next()
        .ok_or_else(|| AuditError::HtmlParse {
            url: base_url.to_string(),
            message: format!("product #{} has no article label", index + 1),
        })?;

    let article = extract_article(&label.text().collect::<String>(), &selectors.article_prefix);

    let has_documentation = item
        .select(&selectors.documentation_indicator)
        .next()
        .is_some();

    let detail_url = if has_documentation {
        let url = item
            .select(&selectors.detail_link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .and_then(|href| resolve_href(href, base_url));

        if url.is_none() {
            tracing::warn!("Product {} has documentation but no detail link", article);
        }
        url
    } else {
        None
    };

    Ok(ProductRecord {
        article,
        has_documentation,
        detail_url,
    })
}

/// Returns the text after the last occurrence of `prefix`, trimmed
///
/// Label text without the prefix is used whole.
fn extract_article(label_text: &str, prefix: &str) -> String {
    label_text
        .rsplit(prefix)
        .next()
        .unwrap_or(label_text)
        .trim()
        .to_string()
}

/// Resolves an href against the base URL
///
/// Returns None for empty hrefs and hrefs that do not form a valid URL.
pub(crate) fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    base_url.join(href).ok()
}
