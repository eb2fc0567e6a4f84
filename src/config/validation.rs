use crate::config::selectors::SiteSelectors;
use crate::config::types::{Config, MarkerConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_marker_config(&config.markers)?;
    Ok(())
}

/// Validates the catalogue endpoint configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.search_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid search-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "search-url '{}' must use http or https",
            config.search_url
        )));
    }

    if config.page_limit < 1 || config.page_limit > 1000 {
        return Err(ConfigError::Validation(format!(
            "page-limit must be between 1 and 1000, got {}",
            config.page_limit
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Name: non-empty, alphanumeric plus hyphens and underscores
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.name
        )));
    }

    if let Some(contact_url) = config.contact_url.as_deref().filter(|u| !u.is_empty()) {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates markup markers: literal markers must be non-empty, selectors must compile
fn validate_marker_config(config: &MarkerConfig) -> Result<(), ConfigError> {
    for (key, value) in [
        ("article-prefix", &config.article_prefix),
        ("next-page-label", &config.next_page_label),
        ("current-datasheet-prefix", &config.current_datasheet_prefix),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
        }
    }

    SiteSelectors::compile(config)?;

    Ok(())
}
