use serde::Deserialize;

/// Main configuration structure for Datasheet-Audit
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub http: HttpConfig,
    pub markers: MarkerConfig,
}

/// Catalogue endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Search endpoint that free-text queries are sent to
    #[serde(rename = "search-url")]
    pub search_url: String,

    /// Number of products requested per listing page
    #[serde(rename = "page-limit")]
    pub page_limit: u32,

    /// Value of the `showcase` query parameter
    pub showcase: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search_url: "https://ruelectronics.com/search/".to_string(),
            page_limit: 100,
            showcase: true,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub name: String,

    pub version: String,

    /// URL with information about the tool, appended to the user agent when set
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the user agent header: `Name/Version` or `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(url) if !url.is_empty() => format!("{}/{} (+{})", self.name, self.version, url),
            _ => format!("{}/{}", self.name, self.version),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds; 0 keeps the transport default
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

/// Markup markers describing where the audit finds its data
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Container element of one product on a listing page
    pub product: String,

    /// Element holding the manufacturer article text
    #[serde(rename = "article-label")]
    pub article_label: String,

    /// Text preceding the article code inside the label
    #[serde(rename = "article-prefix")]
    pub article_prefix: String,

    /// Element whose presence means the product advertises documentation
    #[serde(rename = "documentation-indicator")]
    pub documentation_indicator: String,

    /// Anchor linking a product to its detail page
    #[serde(rename = "detail-link")]
    pub detail_link: String,

    /// Anchor on the detail page pointing at the datasheet asset
    #[serde(rename = "datasheet-link")]
    pub datasheet_link: String,

    /// Pagination control on a listing page
    pub pagination: String,

    /// Entries of the pagination control, including the previous/next controls
    #[serde(rename = "pagination-item")]
    pub pagination_item: String,

    /// Visible text of the "next page" link
    #[serde(rename = "next-page-label")]
    pub next_page_label: String,

    /// Filename prefix of datasheets that follow the current naming convention
    #[serde(rename = "current-datasheet-prefix")]
    pub current_datasheet_prefix: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            product: ".b-product-list__item".to_string(),
            article_label: "div.product-model".to_string(),
            article_prefix: "Артикул производителя:".to_string(),
            documentation_indicator: "div[title=\"Документация\"]".to_string(),
            detail_link: "a.h4".to_string(),
            datasheet_link: "a.tab-link".to_string(),
            pagination: "ul.pagination".to_string(),
            pagination_item: "li".to_string(),
            next_page_label: ">".to_string(),
            current_datasheet_prefix: "Datasheet-".to_string(),
        }
    }
}
