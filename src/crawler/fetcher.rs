//! Page fetching
//!
//! The crawler only needs "give me the markup behind this URL". That need is
//! the `PageFetcher` trait; `HttpFetcher` is the reqwest implementation used
//! in production. Nothing here retries: a failed request is reported once.

use crate::config::Config;
use crate::FetchError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Retrieves the raw markup of a page
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use cars_data_scraper::config::Config;
/// use cars_data_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.crawler.timeout))
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// HTTP page fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })
    }
}

/// Resolves a link found on the site against the site base URL
///
/// Absolute links are returned unchanged; site-relative links are joined to
/// `base`.
pub fn resolve_link(base: &Url, link: &str) -> Result<Url, FetchError> {
    base.join(link.trim())
        .map_err(|source| FetchError::InvalidUrl {
            url: link.to_string(),
            source,
        })
}
