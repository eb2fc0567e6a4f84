//! Per-run crawl progress
//!
//! Progress is feedback only; nothing in the crawl depends on it.

use std::time::{Duration, Instant};

/// Progress of one audit run
#[derive(Debug, Clone)]
pub struct CrawlProgress {
    /// Listing pages fully processed so far
    pub current_page: usize,

    /// Listing pages advertised by the first page
    pub total_pages: usize,

    /// When the page loop started
    pub started_at: Instant,
}

impl CrawlProgress {
    /// Starts tracking a run of `total_pages` pages
    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 0,
            total_pages,
            started_at: Instant::now(),
        }
    }

    /// Records one more processed page
    pub fn advance(&mut self) {
        self.current_page += 1;
    }

    /// Processed fraction in `0.0..=1.0`
    ///
    /// The advertised total can be lower than the pages actually crawled, so
    /// the fraction is clamped.
    pub fn fraction(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        (self.current_page as f64 / self.total_pages as f64).min(1.0)
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Estimated time left, extrapolated from the pace so far
    pub fn estimated_remaining(&self) -> Duration {
        self.estimate_remaining_from(self.elapsed())
    }

    fn estimate_remaining_from(&self, elapsed: Duration) -> Duration {
        let fraction = self.fraction();
        if fraction <= 0.0 {
            return Duration::ZERO;
        }
        let estimated_total = elapsed.as_secs_f64() / fraction;
        Duration::from_secs_f64((estimated_total - elapsed.as_secs_f64()).max(0.0))
    }
}

/// Receives progress updates from the crawl loop
///
/// Reporters are shared with the audit future, which may run on any worker thread.
pub trait ProgressReporter: Send + Sync {
    /// Called once the total page count is known
    fn on_start(&self, total_pages: usize);

    /// Called after every processed listing page
    fn on_page(&self, progress: &CrawlProgress);

    /// Called when the last page has been processed
    fn on_finish(&self, progress: &CrawlProgress);
}

/// Reports progress through tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn on_start(&self, total_pages: usize) {
        tracing::info!("Listing has {} page(s)", total_pages);
    }

    fn on_page(&self, progress: &CrawlProgress) {
        tracing::info!(
            "Processed pages: {}/{}, about {:.1}s remaining",
            progress.current_page,
            progress.total_pages,
            progress.estimated_remaining().as_secs_f64()
        );
    }

    fn on_finish(&self, progress: &CrawlProgress) {
        tracing::info!(
            "Done: {} page(s) in {:.1}s",
            progress.current_page,
            progress.elapsed().as_secs_f64()
        );
    }
}
