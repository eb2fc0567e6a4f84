//! Datasheet-Audit: finds products with missing or outdated datasheets
//!
//! This crate walks the paginated product listings of an electronics catalogue,
//! follows every product that advertises documentation to its detail page, and
//! reports the products whose datasheet is absent or does not follow the current
//! naming convention.

pub mod classify;
pub mod config;
pub mod crawler;
pub mod input;
pub mod output;

use thiserror::Error;

pub use output::OutputError;

/// Main error type for Datasheet-Audit operations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Datasheet-Audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use classify::{classify, ClassificationResult, DatasheetStatus};
pub use config::Config;
pub use crawler::{audit, AuditReport, Coordinator};
pub use input::AuditInput;
