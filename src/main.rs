//! Cars-Data scraper main entry point
//!
//! This is the command-line interface for the Cars-Data scraper.

use anyhow::Context;
use cars_data_scraper::config::Config;
use cars_data_scraper::crawler::run_crawl;
use cars_data_scraper::output::print_statistics;
use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Scraper for cars-data.com
///
/// Walks every brand, model, version and motor of the catalogue and writes
/// one semicolon-delimited CSV file per brand into `Exports/`.
#[derive(Parser, Debug)]
#[command(name = "cars-data-scraper")]
#[command(version)]
#[command(about = "Scraper cars-data.", long_about = None)]
struct Cli {
    /// Display debugging information
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let config = Config::default();
    tracing::info!("Crawling {}", config.site.base_url);

    let stats = run_crawl(config, started)
        .await
        .context("crawl aborted")?;

    print_statistics(&stats);

    Ok(())
}

/// Sets up the logging/tracing subscriber
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cars_data_scraper=debug,info")
    } else {
        EnvFilter::new("cars_data_scraper=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
