//! Configuration module for the scraper
//!
//! The scraper takes no configuration file. `Config::default()` describes the
//! live site; `validate` checks a configuration before a crawl starts.
//!
//! # Example
//!
//! ```
//! use cars_data_scraper::config::{validate, Config};
//!
//! let mut config = Config::default();
//! config.crawler.request_delay = 250;
//! assert!(validate(&config).is_ok());
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SelectorConfig, SiteConfig, UserAgentConfig};

pub use validation::validate;
pub(crate) use validation::check_selector;
