//! Crawler module for page fetching and extraction
//!
//! This module contains the core crawling logic, including:
//! - Page fetching through the `PageFetcher` trait
//! - HTML parsing and link extraction on listing pages
//! - Attribute extraction on motor pages
//! - The brand → model → version → motor walk
//! - Overall crawl coordination

mod document;
mod driver;
mod fetcher;
mod hierarchy;
mod links;
mod specs;

pub use document::{anchor_href, first_text, Document, Selectors};
pub use driver::{run_crawl, CrawlDriver, DriverState};
pub use fetcher::{build_http_client, resolve_link, HttpFetcher, PageFetcher};
pub use hierarchy::HierarchyCrawler;
pub use links::{extract_links, extract_links_strict};
pub use specs::{extract_specs, parse_breadcrumb, Breadcrumb};
