//! Brand subtree walk: brand → models → versions → motors
//!
//! Failures stay local. A listing page that cannot be fetched drops its own
//! subtree; a motor page that cannot be fetched or read drops that motor.
//! Neither stops the rest of the brand.

use crate::crawler::document::{Document, Selectors};
use crate::crawler::fetcher::{resolve_link, PageFetcher};
use crate::crawler::links::extract_links;
use crate::crawler::specs::extract_specs;
use crate::output::CrawlStats;
use crate::record::{BrandBatch, Record};
use crate::FetchError;
use scraper::Selector;
use std::time::Duration;
use url::Url;

/// Walks the catalogue below one brand
pub struct HierarchyCrawler<'a, F> {
    fetcher: &'a F,
    selectors: &'a Selectors,
    base_url: &'a Url,
    request_delay: Duration,
}

impl<'a, F: PageFetcher> HierarchyCrawler<'a, F> {
    pub fn new(
        fetcher: &'a F,
        selectors: &'a Selectors,
        base_url: &'a Url,
        request_delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            selectors,
            base_url,
            request_delay,
        }
    }

    /// Crawls a brand and returns every motor record found below it
    ///
    /// Pages are fetched one at a time. After each motor page the crawler
    /// pauses for `request_delay`; listing pages are not delayed.
    pub async fn crawl(&self, brand_link: &str, stats: &mut CrawlStats) -> BrandBatch {
        let mut batch = BrandBatch::new();

        let models = match self.list_links(brand_link, &self.selectors.model).await {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!("Skipping brand page {}: {}", brand_link, e);
                stats.listings_skipped += 1;
                return batch;
            }
        };

        for model in models.iter().filter(|link| !link.is_empty()) {
            tracing::debug!("Model : {}", model);

            let versions = match self.list_links(model, &self.selectors.version).await {
                Ok(links) => links,
                Err(e) => {
                    tracing::warn!("Skipping model page {}: {}", model, e);
                    stats.listings_skipped += 1;
                    continue;
                }
            };

            for version in versions.iter().filter(|link| !link.is_empty()) {
                tracing::debug!("Version : {}", version);

                let motors = match self.list_links(version, &self.selectors.motor).await {
                    Ok(links) => links,
                    Err(e) => {
                        tracing::warn!("Skipping version page {}: {}", version, e);
                        stats.listings_skipped += 1;
                        continue;
                    }
                };

                for motor in motors.iter().filter(|link| !link.is_empty()) {
                    tracing::debug!("Motor : {}", motor);

                    match self.fetch_specs(motor).await {
                        Ok(record) => {
                            let index = batch.push(record);
                            stats.records += 1;
                            tracing::trace!("Stored motor {} at index {}", motor, index);
                        }
                        Err(e) => {
                            tracing::warn!("Skipping motor page {}: {}", motor, e);
                            stats.motors_skipped += 1;
                        }
                    }

                    tokio::time::sleep(self.request_delay).await;
                }
            }
        }

        batch
    }

    /// Fetches and parses the page behind a site link
    async fn fetch_document(&self, link: &str) -> Result<Document, FetchError> {
        let url = resolve_link(self.base_url, link)?;
        let markup = self.fetcher.fetch(url.as_str()).await?;
        Ok(Document::parse(&markup))
    }

    /// Fetches a listing page and extracts its child links
    async fn list_links(&self, link: &str, container: &Selector) -> Result<Vec<String>, FetchError> {
        let document = self.fetch_document(link).await?;
        Ok(extract_links(&document, container, &self.selectors.anchor))
    }

    /// Fetches a motor page and extracts its record
    async fn fetch_specs(&self, link: &str) -> crate::Result<Record> {
        let document = self.fetch_document(link).await?;
        let record = extract_specs(&document, self.selectors)?;
        tracing::info!("Extracting {}", record.motor());
        Ok(record)
    }
}
