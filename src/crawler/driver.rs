//! Crawl driver - main crawl orchestration logic
//!
//! The driver moves through `Init → FetchIndex → PerBrand(i) → Done`:
//! - `Init` makes sure the output directory exists
//! - `FetchIndex` reads the brand list once
//! - `PerBrand` crawls and exports each brand in turn
//! - `Done` reports the elapsed time
//!
//! Only the first two states can fail the run. Inside `PerBrand`, every
//! failure is logged and the loop moves on to the next brand.

use crate::config::{validate, Config};
use crate::crawler::document::{Document, Selectors};
use crate::crawler::fetcher::{resolve_link, PageFetcher};
use crate::crawler::hierarchy::HierarchyCrawler;
use crate::crawler::links::extract_links_strict;
use crate::output::{export_batch, CrawlStats};
use crate::Result;
use std::time::Instant;
use tracing::Instrument;
use url::Url;

/// Where the driver is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Init,
    FetchIndex,
    PerBrand(usize),
    Done,
}

/// Main crawl driver structure
pub struct CrawlDriver<F> {
    config: Config,
    selectors: Selectors,
    base_url: Url,
    excluded: Vec<String>,
    fetcher: F,
    started: Instant,
    state: DriverState,
}

impl<F: PageFetcher> CrawlDriver<F> {
    /// Creates a new driver instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration, validated here
    /// * `fetcher` - Source of page markup
    /// * `started` - Start of the run, used for the final elapsed time
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlDriver)` - Successfully created driver
    /// * `Err(ScraperError::Config)` - Invalid configuration
    pub fn new(config: Config, fetcher: F, started: Instant) -> Result<Self> {
        validate(&config)?;

        let selectors = Selectors::compile(&config.selectors)?;
        let base_url = config.site.base_url()?;
        let excluded = config.site.excluded_urls()?;

        Ok(Self {
            config,
            selectors,
            base_url,
            excluded,
            fetcher,
            started,
            state: DriverState::Init,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Runs the whole crawl
    ///
    /// Brands are processed strictly one after another; the records of a
    /// brand are exported and dropped before the next brand starts.
    pub async fn run(&mut self) -> Result<CrawlStats> {
        self.state = DriverState::Init;
        self.prepare_output_dir()?;

        self.state = DriverState::FetchIndex;
        let brands = self.fetch_brand_links().await?;
        tracing::info!("Found {} brands", brands.len());

        let mut stats = CrawlStats {
            brands_found: brands.len() as u64,
            ..Default::default()
        };

        for (index, brand) in brands.iter().enumerate() {
            self.state = DriverState::PerBrand(index);

            if brand.is_empty() {
                tracing::debug!("Skipping brand {} without link", index);
                stats.brands_skipped += 1;
                continue;
            }

            if self.is_excluded(brand) {
                tracing::info!("Skipping excluded brand {}", brand);
                stats.brands_skipped += 1;
                continue;
            }

            let span = tracing::info_span!("brand", index, link = %brand);
            self.process_brand(brand, &mut stats).instrument(span).await;
        }

        self.state = DriverState::Done;
        stats.elapsed = self.started.elapsed();
        tracing::info!("Runtime : {:.2} seconds", stats.elapsed.as_secs_f64());

        Ok(stats)
    }

    /// Creates the output directory if it does not exist yet
    fn prepare_output_dir(&self) -> Result<()> {
        let directory = &self.config.output.directory;
        if !directory.exists() {
            tracing::debug!("Creating output directory {}", directory.display());
        }
        std::fs::create_dir_all(directory)?;
        Ok(())
    }

    /// Fetches the index page and lists one link per brand container
    async fn fetch_brand_links(&self) -> Result<Vec<String>> {
        let url = resolve_link(&self.base_url, &self.config.site.index_path)?;
        tracing::debug!("Fetching brand index {}", url);

        let markup = self.fetcher.fetch(url.as_str()).await?;
        let document = Document::parse(&markup);

        Ok(extract_links_strict(
            &document,
            &self.selectors.brand,
            &self.selectors.anchor,
        ))
    }

    fn is_excluded(&self, link: &str) -> bool {
        if self.excluded.is_empty() {
            return false;
        }

        match resolve_link(&self.base_url, link) {
            Ok(url) => self.excluded.iter().any(|excluded| excluded == url.as_str()),
            Err(_) => false,
        }
    }

    /// Crawls one brand and exports its records
    async fn process_brand(&self, brand: &str, stats: &mut CrawlStats) {
        tracing::info!("Brand : {}", brand);

        let crawler = HierarchyCrawler::new(
            &self.fetcher,
            &self.selectors,
            &self.base_url,
            self.config.crawler.request_delay(),
        );
        let batch = crawler.crawl(brand, stats).await;
        stats.brands_crawled += 1;

        match export_batch(&batch, &self.config.output.directory) {
            Ok(path) => {
                stats.exports_written += 1;
                tracing::debug!("Exported {} records to {}", batch.len(), path.display());
            }
            Err(e) => {
                stats.exports_failed += 1;
                tracing::error!("Export failed for {}: {}", brand, e);
            }
        }
    }
}

/// Runs the main crawl operation against the live site
///
/// # Example
///
/// ```no_run
/// use cars_data_scraper::config::Config;
/// use cars_data_scraper::crawler::run_crawl;
/// use std::time::Instant;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let stats = run_crawl(Config::default(), Instant::now()).await?;
/// println!("{} records", stats.records);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, started: Instant) -> Result<CrawlStats> {
    let fetcher = crate::crawler::HttpFetcher::new(&config)?;
    let mut driver = CrawlDriver::new(config, fetcher, started)?;
    driver.run().await
}
