//! Compiled CSS selectors for the configured markup markers

use crate::config::types::MarkerConfig;
use crate::ConfigError;
use scraper::Selector;

/// Selectors and literal markers compiled once per run
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    pub product: Selector,
    pub article_label: Selector,
    pub documentation_indicator: Selector,
    pub detail_link: Selector,
    pub datasheet_link: Selector,
    pub pagination: Selector,
    pub pagination_item: Selector,
    pub anchor: Selector,
    pub article_prefix: String,
    pub next_page_label: String,
    pub current_datasheet_prefix: String,
}

impl SiteSelectors {
    /// Compiles every selector in the marker configuration
    ///
    /// # Returns
    ///
    /// * `Ok(SiteSelectors)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed to compile
    pub fn compile(markers: &MarkerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            product: parse_selector("product", &markers.product)?,
            article_label: parse_selector("article-label", &markers.article_label)?,
            documentation_indicator: parse_selector(
                "documentation-indicator",
                &markers.documentation_indicator,
            )?,
            detail_link: parse_selector("detail-link", &markers.detail_link)?,
            datasheet_link: parse_selector("datasheet-link", &markers.datasheet_link)?,
            pagination: parse_selector("pagination", &markers.pagination)?,
            pagination_item: parse_selector("pagination-item", &markers.pagination_item)?,
            anchor: parse_selector("anchor", "a")?,
            article_prefix: markers.article_prefix.clone(),
            next_page_label: markers.next_page_label.clone(),
            current_datasheet_prefix: markers.current_datasheet_prefix.clone(),
        })
    }
}

fn parse_selector(key: &str, css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css)
        .map_err(|e| ConfigError::InvalidSelector(format!("{} = '{}': {}", key, css, e)))
}
