//! Configuration module for Datasheet-Audit
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default matching the catalogue's markup, so a configuration
//! file is only needed to point the audit at a differently shaped site.
//!
//! # Example
//!
//! ```no_run
//! use datasheet_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("audit.toml")).unwrap();
//! println!("Searching via: {}", config.site.search_url);
//! ```

mod parser;
mod selectors;
mod types;
mod validation;

// Re-export types
pub use selectors::SiteSelectors;
pub use types::{Config, HttpConfig, MarkerConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
