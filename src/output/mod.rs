//! Output module for exported data and run reports
//!
//! This module handles:
//! - Writing one semicolon-delimited CSV file per brand
//! - Recording and printing crawl statistics

mod export;
pub mod stats;

pub use export::{export_batch, export_path, ExportError, ExportResult, Table, DELIMITER};
pub use stats::{format_statistics, print_statistics, CrawlStats};
