//! Input resolution
//!
//! Turns what the user typed (a free-text search or a category listing URL)
//! into the first listing page to crawl.

use crate::config::SiteConfig;
use crate::ConfigError;
use url::Url;

/// Where an audit starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditInput {
    /// Free-text query sent to the catalogue's search endpoint
    Query(String),
    /// Category listing URL supplied directly
    Category(String),
}

impl AuditInput {
    /// Resolves the input to the URL of the first listing page
    ///
    /// Both modes carry the configured `limit` and `showcase` parameters.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Url))` - The first listing page
    /// * `Ok(None)` - Blank input; nothing should be fetched
    /// * `Err(ConfigError)` - The search endpoint or category URL does not parse
    ///
    /// # Example
    ///
    /// ```
    /// use datasheet_audit::config::SiteConfig;
    /// use datasheet_audit::input::AuditInput;
    ///
    /// let site = SiteConfig::default();
    /// let url = AuditInput::Query("LM317".to_string())
    ///     .start_url(&site)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://ruelectronics.com/search/?search=LM317&limit=100&showcase=true"
    /// );
    /// ```
    pub fn start_url(&self, site: &SiteConfig) -> Result<Option<Url>, ConfigError> {
        match self {
            Self::Query(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return Ok(None);
                }

                let mut url = Url::parse(&site.search_url)
                    .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", site.search_url, e)))?;
                url.query_pairs_mut().append_pair("search", query);
                append_listing_params(&mut url, site);
                Ok(Some(url))
            }
            Self::Category(category) => {
                let category = category.trim();
                if category.is_empty() {
                    return Ok(None);
                }

                let mut url = Url::parse(category)
                    .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", category, e)))?;
                append_listing_params(&mut url, site);
                Ok(Some(url))
            }
        }
    }
}

fn append_listing_params(url: &mut Url, site: &SiteConfig) {
    url.query_pairs_mut()
        .append_pair("limit", &site.page_limit.to_string())
        .append_pair("showcase", if site.showcase { "true" } else { "false" });
}
