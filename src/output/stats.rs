//! Run statistics
//!
//! Counters collected while crawling, printed once the run is done.

use std::fmt::Write;
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStats {
    /// Brand links found on the index page
    pub brands_found: u64,

    /// Brands whose subtree was walked
    pub brands_crawled: u64,

    /// Brands skipped because their link was empty or excluded
    pub brands_skipped: u64,

    /// Motor records extracted
    pub records: u64,

    /// Motor pages that could not be fetched or read
    pub motors_skipped: u64,

    /// Brand, model or version pages that could not be fetched
    pub listings_skipped: u64,

    /// Export files written
    pub exports_written: u64,

    /// Brands whose export failed
    pub exports_failed: u64,

    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Motor pages the crawler tried to read
    pub fn attempted(&self) -> u64 {
        self.records + self.motors_skipped
    }

    /// Share of attempted motor pages that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.attempted();
        if attempted == 0 {
            return 0.0;
        }
        (self.records as f64 / attempted as f64) * 100.0
    }
}

/// Renders the statistics report
///
/// The elapsed time is not part of it; the driver logs that when it finishes.
pub fn format_statistics(stats: &CrawlStats) -> String {
    let mut report = String::from("=== Crawl Statistics ===\n\n");

    let _ = writeln!(report, "Brands:");
    let _ = writeln!(report, "  Found: {}", stats.brands_found);
    let _ = writeln!(report, "  Crawled: {}", stats.brands_crawled);
    let _ = writeln!(report, "  Skipped: {}", stats.brands_skipped);
    report.push('\n');

    let _ = writeln!(report, "Pages:");
    let _ = writeln!(report, "  Records extracted: {}", stats.records);
    let _ = writeln!(report, "  Motor pages skipped: {}", stats.motors_skipped);
    let _ = writeln!(report, "  Listing pages skipped: {}", stats.listings_skipped);
    report.push('\n');

    let _ = writeln!(report, "Exports:");
    let _ = writeln!(report, "  Written: {}", stats.exports_written);
    let _ = writeln!(report, "  Failed: {}", stats.exports_failed);
    report.push('\n');

    let _ = writeln!(
        report,
        "Success Rate: {:.1}% ({} / {} motor pages extracted)",
        stats.success_rate(),
        stats.records,
        stats.attempted()
    );

    report
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStats) {
    print!("{}", format_statistics(stats));
}
