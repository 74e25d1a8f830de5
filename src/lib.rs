//! Cars-Data scraper: a polite four-level catalogue crawler
//!
//! This crate walks the brand → model → version → motor hierarchy of a car
//! specification site, extracts a flat attribute table from every motor page
//! and writes one semicolon-delimited file per brand.

pub mod config;
pub mod crawler;
pub mod output;
pub mod record;


use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed page: {0}")]
    MalformedPage(#[from] MalformedPageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while retrieving a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Cannot resolve link '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },
}

/// A motor page whose breadcrumb cannot be read
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedPageError {
    #[error("breadcrumb navigation is missing")]
    MissingBreadcrumb,

    #[error("breadcrumb has {found} entries, expected at least 5")]
    IncompleteBreadcrumb { found: usize },

    #[error("breadcrumb entry {position} has no label text")]
    MissingLabel { position: usize },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector for {name}: '{selector}'")]
    InvalidSelector { name: &'static str, selector: String },
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlDriver, HttpFetcher, PageFetcher};
pub use output::CrawlStats;
pub use record::{BrandBatch, Record};
