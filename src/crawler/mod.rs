//! Crawler module for listing traversal and datasheet lookup
//!
//! This module contains the core audit logic, including:
//! - HTTP fetching
//! - Listing page parsing
//! - Datasheet resolution on detail pages
//! - Pagination
//! - Overall run coordination and progress tracking

mod coordinator;
mod fetcher;
mod pagination;
mod parser;
mod progress;
mod resolver;

pub use coordinator::{audit, AuditReport, Coordinator};
pub use fetcher::{build_http_client, fetch_page};
pub use pagination::{count_total_pages, next_page_url};
pub use parser::{parse_listing, ProductRecord};
pub use progress::{CrawlProgress, LogReporter, ProgressReporter};
pub use resolver::{extract_datasheet_link, resolve_datasheet, resolve_datasheets};
