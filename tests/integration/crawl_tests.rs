//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a miniature catalogue and run the full
//! crawl cycle end-to-end through the HTTP fetcher.

use cars_data_scraper::config::Config;
use cars_data_scraper::crawler::{CrawlDriver, DriverState, HttpFetcher, PageFetcher};
use cars_data_scraper::FetchError;
use std::path::Path;
use std::time::Instant;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, output: &Path) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.site.index_path = "/en/car-brands-cars-logos.html".to_string();
    config.crawler.request_delay = 10; // Very short for testing
    config.output.directory = output.join("Exports");
    config
}

async fn mount_page(server: &MockServer, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn listing(class: &str, links: &[&str]) -> String {
    let items: String = links
        .iter()
        .map(|link| format!(r#"<div class="{}"><a href="{}">item</a></div>"#, class, link))
        .collect();
    format!("<html><body>{}</body></html>", items)
}

fn motor_page(names: [&str; 4], pairs: &[(&str, &str)]) -> String {
    let crumbs: String = std::iter::once("Home")
        .chain(names)
        .map(|name| format!(r#"<a href="/"><span>{}</span></a>"#, name))
        .collect();
    let cells: String = pairs
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div class="col-6">{}</div><div class="col-6">{}</div>"#,
                label, value
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="breadcrumb">{}</div><div class="row">{}</div></body></html>"#,
        crumbs, cells
    )
}

/// Mounts brand-a with one model, one version and the given motors
async fn mount_brand_a(server: &MockServer, motors: &[(&str, String)]) {
    mount_page(
        server,
        "/en/brand-a.html",
        listing("col-4", &["/en/brand-a/model-x.html"]),
    )
    .await;
    mount_page(
        server,
        "/en/brand-a/model-x.html",
        listing("col-4", &["/en/brand-a/model-x/version-y.html"]),
    )
    .await;

    let links: Vec<&str> = motors.iter().map(|(link, _)| *link).collect();
    mount_page(
        server,
        "/en/brand-a/model-x/version-y.html",
        listing("col-6", &links),
    )
    .await;

    for (link, body) in motors {
        mount_page(server, link, body.clone()).await;
    }
}

#[tokio::test]
async fn test_full_crawl_single_brand() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    // One real brand, one decorative container without an anchor
    mount_page(
        &mock_server,
        "/en/car-brands-cars-logos.html",
        r#"<html><body>
            <div class="col-2 center"><a href="/en/brand-a.html"><img src="a.png"></a></div>
            <div class="col-2 center"><img src="placeholder.png"></div>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_brand_a(
        &mock_server,
        &[(
            "/en/brand-a/motor-z.html",
            motor_page(
                ["Brand-A", "Model-X", "Version-Y", "Motor-Z"],
                &[("Power:", "150 hp"), ("Weight:", "1200 kg")],
            ),
        )],
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut driver = CrawlDriver::new(config, fetcher, Instant::now()).expect("Invalid config");

    let stats = driver.run().await.expect("Crawl failed");

    assert_eq!(driver.state(), DriverState::Done);
    assert_eq!(stats.brands_found, 2);
    assert_eq!(stats.brands_crawled, 1);
    assert_eq!(stats.records, 1);
    assert_eq!(stats.exports_written, 1);

    let exported = output.path().join("Exports").join("cars_Brand-A.csv");
    let content = std::fs::read_to_string(&exported).expect("Export file missing");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 2, "Expected header and one row, got {:?}", lines);
    assert_eq!(lines[0], ";Brand;Model;Version;Motor;Power;Weight");
    assert_eq!(lines[1], "0;Brand-A;Model-X;Version-Y;Motor-Z;150 hp;1200 kg");
}

#[tokio::test]
async fn test_malformed_motor_keeps_partial_batch() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/en/car-brands-cars-logos.html",
        listing("col-2 center", &["/en/brand-a.html"]),
    )
    .await;

    mount_brand_a(
        &mock_server,
        &[
            (
                "/en/brand-a/motor-1.html",
                motor_page(
                    ["Brand-A", "Model-X", "Version-Y", "Motor-1"],
                    &[("Power:", "110 hp")],
                ),
            ),
            (
                "/en/brand-a/motor-2.html",
                "<html><body><div class=\"col-6\">Power:</div></body></html>".to_string(),
            ),
        ],
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut driver = CrawlDriver::new(config, fetcher, Instant::now()).expect("Invalid config");

    let stats = driver.run().await.expect("Crawl failed");

    assert_eq!(stats.records, 1);
    assert_eq!(stats.motors_skipped, 1);
    assert_eq!(stats.exports_written, 1);

    let content = std::fs::read_to_string(output.path().join("Exports/cars_Brand-A.csv"))
        .expect("Export file missing");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Motor-1"));
}

#[tokio::test]
async fn test_heterogeneous_attributes_share_one_file() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/en/car-brands-cars-logos.html",
        listing("col-2 center", &["/en/brand-a.html"]),
    )
    .await;

    mount_brand_a(
        &mock_server,
        &[
            (
                "/en/brand-a/petrol.html",
                motor_page(
                    ["Brand-A", "Model-X", "Version-Y", "1.5 TSI"],
                    &[("Power:", "150 hp"), ("Fuel:", "Petrol")],
                ),
            ),
            (
                "/en/brand-a/electric.html",
                motor_page(
                    ["Brand-A", "Model-X", "Version-Y", "e-Motor"],
                    &[("Power:", "204 hp"), ("Battery:", "77 kWh")],
                ),
            ),
        ],
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut driver = CrawlDriver::new(config, fetcher, Instant::now()).expect("Invalid config");

    driver.run().await.expect("Crawl failed");

    let content = std::fs::read_to_string(output.path().join("Exports/cars_Brand-A.csv"))
        .expect("Export file missing");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], ";Brand;Model;Version;Motor;Power;Fuel;Battery");
    assert_eq!(lines[1], "0;Brand-A;Model-X;Version-Y;1.5 TSI;150 hp;Petrol;");
    assert_eq!(lines[2], "1;Brand-A;Model-X;Version-Y;e-Motor;204 hp;;77 kWh");
}

#[tokio::test]
async fn test_failed_brand_does_not_stop_run() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    // The first brand page answers 500, so its batch stays empty
    mount_page(
        &mock_server,
        "/en/car-brands-cars-logos.html",
        listing("col-2 center", &["/en/broken.html", "/en/brand-a.html"]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/en/broken.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    mount_brand_a(
        &mock_server,
        &[(
            "/en/brand-a/motor-z.html",
            motor_page(["Brand-A", "Model-X", "Version-Y", "Motor-Z"], &[]),
        )],
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut driver = CrawlDriver::new(config, fetcher, Instant::now()).expect("Invalid config");

    let stats = driver.run().await.expect("Crawl failed");

    assert_eq!(stats.brands_crawled, 2);
    assert_eq!(stats.listings_skipped, 1);
    assert_eq!(stats.exports_failed, 1);
    assert_eq!(stats.exports_written, 1);
    assert!(output.path().join("Exports/cars_Brand-A.csv").exists());
}

#[tokio::test]
async fn test_empty_brand_link_triggers_no_request() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/en/car-brands-cars-logos.html",
        listing("col-2 center", &[""]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut driver = CrawlDriver::new(config, fetcher, Instant::now()).expect("Invalid config");

    let stats = driver.run().await.expect("Crawl failed");

    assert_eq!(stats.brands_skipped, 1);
    assert_eq!(stats.brands_crawled, 0);

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording disabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/en/car-brands-cars-logos.html");
}

#[tokio::test]
async fn test_http_fetcher_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&Config::default()).expect("Failed to build fetcher");
    let result = fetcher
        .fetch(&format!("{}/missing.html", mock_server.uri()))
        .await;

    match result {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_fetcher_returns_body() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/page.html", "<p>hello</p>".to_string()).await;

    let fetcher = HttpFetcher::new(&Config::default()).expect("Failed to build fetcher");
    let body = fetcher
        .fetch(&format!("{}/page.html", mock_server.uri()))
        .await
        .expect("Fetch failed");

    assert_eq!(body, "<p>hello</p>");
}

#[tokio::test]
async fn test_unreachable_index_is_fatal() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    let config = create_test_config(&mock_server.uri(), output.path());
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut driver = CrawlDriver::new(config, fetcher, Instant::now()).expect("Invalid config");

    assert!(driver.run().await.is_err());
    assert_eq!(driver.state(), DriverState::FetchIndex);
}
