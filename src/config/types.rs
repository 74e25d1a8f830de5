use crate::{ConfigError, ConfigResult};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Main configuration structure for the scraper
///
/// There is no configuration file: `Config::default()` targets the live
/// site, and tests override individual sections.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub site: SiteConfig,
    pub selectors: SelectorConfig,
    pub crawler: CrawlerConfig,
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Where the catalogue lives
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL every site-relative link is resolved against
    pub base_url: String,

    /// Path (or absolute URL) of the page listing every brand
    pub index_path: String,

    /// Brand pages already exported, relative to `<base_url>/en/`
    pub exclude: Vec<String>,
}

impl SiteConfig {
    /// Parses the base URL
    pub fn base_url(&self) -> ConfigResult<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))
    }

    /// Absolute URLs of the excluded brand pages
    pub fn excluded_urls(&self) -> ConfigResult<Vec<String>> {
        let base = self.base_url()?;
        self.exclude
            .iter()
            .map(|entry| {
                base.join(&format!("/en/{}", entry))
                    .map(|url| url.to_string())
                    .map_err(|e| ConfigError::InvalidUrl(format!("Invalid exclusion {}: {}", entry, e)))
            })
            .collect()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.cars-data.com".to_string(),
            index_path: "/en/car-brands-cars-logos.html".to_string(),
            exclude: Vec::new(),
        }
    }
}

/// CSS selectors describing the page layout at each level
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Containers on the index page, one per brand
    pub brand: String,

    /// Containers on a brand page, one per model
    pub model: String,

    /// Containers on a model page, one per version
    pub version: String,

    /// Containers on a version page, one per motor
    pub motor: String,

    /// Anchor nested inside every container
    pub anchor: String,

    /// Id of the breadcrumb navigation on a motor page
    pub breadcrumb_id: String,

    /// Label element nested in each breadcrumb anchor
    pub breadcrumb_label: String,

    /// Label/value cells on a motor page
    pub detail_cell: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            brand: "div.col-2.center".to_string(),
            model: "div.col-4".to_string(),
            version: "div.col-4".to_string(),
            motor: "div.col-6".to_string(),
            anchor: "a".to_string(),
            breadcrumb_id: "breadcrumb".to_string(),
            breadcrumb_label: "span".to_string(),
            detail_cell: ".col-6".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Pause after every motor page fetch (milliseconds)
    pub request_delay: u64,

    /// Whole-request timeout (seconds)
    pub timeout: u64,

    /// Connection timeout (seconds)
    pub connect_timeout: u64,
}

impl CrawlerConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            request_delay: 1000,
            timeout: 30,
            connect_timeout: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone)]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub crawler_name: String,

    /// Version of the crawler
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Format: CrawlerName/Version
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "cars-data-scraper".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory receiving one CSV file per brand
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("Exports"),
        }
    }
}
