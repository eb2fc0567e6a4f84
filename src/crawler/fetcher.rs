//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made during an audit:
//! - Building the HTTP client shared by one run
//! - GET requests for listing and detail pages
//! - Mapping transport failures and non-success statuses to errors
//!
//! There is no retry: any failure here aborts the run.

use crate::config::{HttpConfig, UserAgentConfig};
use crate::AuditError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Transport settings; a zero timeout keeps reqwest's default
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use datasheet_audit::config::{HttpConfig, UserAgentConfig};
/// use datasheet_audit::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(user_agent.header_value())
        .gzip(true)
        .brotli(true);

    if http.request_timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(http.request_timeout_secs));
    }

    builder.build()
}

/// Fetches a page and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(AuditError::Http)` - DNS, connection, timeout or body read failure
/// * `Err(AuditError::Status)` - The server answered with a non-success status
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, AuditError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| AuditError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuditError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| AuditError::Http {
        url: url.to_string(),
        source,
    })
}
