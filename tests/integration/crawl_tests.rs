//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use recipe_harvest::config::{Config, CrawlerConfig, HttpConfig, OutputConfig};
use recipe_harvest::crawler::{crawl, CrawlEngine, FetchResult, HttpFetcher, PageFetcher};
use recipe_harvest::output::TextSink;
use recipe_harvest::state::CrawlState;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling the mock server
fn create_test_config(base_url: &str, recipes_path: &str) -> Config {
    let domain = url::Url::parse(base_url)
        .expect("Failed to parse base URL")
        .host_str()
        .expect("Failed to extract host")
        .to_string();

    Config {
        crawler: CrawlerConfig {
            start_urls: vec![format!("{}/", base_url)],
            allowed_domain: domain,
            recipe_path_marker: "/recipe/".to_string(),
        },
        http: HttpConfig {
            user_agent: "TestAgent/1.0".to_string(),
            politeness_delay: 0,
            request_timeout: 5,
        },
        output: OutputConfig {
            recipes_path: recipes_path.to_string(),
        },
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

fn recipe_body(title: &str) -> String {
    format!(
        "<h1>{}</h1><h2>Ingredients</h2><p>Flour. Water.</p><h2>Directions</h2><p>Mix. Bake.</p>",
        title
    )
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_end_to_end_crawl_writes_recipes_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        &format!(
            r#"<a href="{0}/recipe/1/bread/">Bread</a>
               <a href="/recipe/2/soup/">Soup</a>
               <a href="{0}/about/">About</a>"#,
            base_url
        ),
    )
    .await;
    mount_page(&mock_server, "/recipe/1/bread/", &recipe_body("Bread")).await;
    mount_page(&mock_server, "/recipe/2/soup/", &recipe_body("Soup")).await;

    // Not a recipe URL, so never requested
    Mock::given(method("GET"))
        .and(path("/about/"))
        .respond_with(html("<h1>About</h1>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("recipes.txt");
    let config = create_test_config(&base_url, out_path.to_str().unwrap());

    let report = crawl(&config, 2).await.expect("Crawl failed");
    assert_eq!(report.state, CrawlState::Completed);
    assert_eq!(report.recipes_found, 2);

    let written = std::fs::read_to_string(&out_path).expect("Output file missing");
    let bread_url = format!("{}/recipe/1/bread/", base_url);
    let soup_url = format!("{}/recipe/2/soup/", base_url);

    assert!(written.starts_with(&format!(
        "Bread\n{}\n\n=== Ingredients ===\nFlour.\nWater.\n\n=== Directions ===\nMix.\nBake.\n\n",
        bread_url
    )));
    assert!(written.contains(&format!("Soup\n{}\n\n", soup_url)));
    assert!(written.find(&bread_url).unwrap() < written.find(&soup_url).unwrap());
    assert!(written.ends_with(&format!("{}\n\n", "=".repeat(50))));
    assert_eq!(written.matches(&"=".repeat(50)).count(), 2);
}

#[tokio::test]
async fn test_target_reached_skips_remaining_candidates() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: String = (1..=5)
        .map(|i| format!(r#"<a href="/recipe/{}/">Recipe {}</a>"#, i, i))
        .collect();
    mount_page(&mock_server, "/", &links).await;

    for i in 1..=5 {
        Mock::given(method("GET"))
            .and(path(format!("/recipe/{}/", i)))
            .respond_with(html(&recipe_body(&format!("Recipe {}", i))))
            .expect(if i <= 2 { 1 } else { 0 })
            .mount(&mock_server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&base_url, dir.path().join("r.txt").to_str().unwrap());
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let mut engine =
        CrawlEngine::new(&config.crawler, 2, fetcher, TextSink::new(Vec::new())).unwrap();

    let report = engine.run().await.expect("Crawl failed");

    assert_eq!(report.state, CrawlState::Completed);
    assert_eq!(engine.results().len(), 2);
    assert_eq!(engine.visited().len(), 1);

    let (results, sink) = engine.into_parts();
    let progress = String::from_utf8(sink.into_progress()).unwrap();
    assert!(progress.contains("Recipe 1"));
    assert!(progress.contains("Recipe 2"));
    assert!(!progress.contains("Recipe 3"));
    assert_eq!(results.get_index(1).unwrap().1.title, "Recipe 2");
}

#[tokio::test]
async fn test_failed_recipe_page_is_degraded_and_counted() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/recipe/broken/">Broken</a><a href="/recipe/ok/">Ok</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/recipe/broken/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/recipe/ok/", &recipe_body("Ok")).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&base_url, dir.path().join("r.txt").to_str().unwrap());
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let mut engine =
        CrawlEngine::new(&config.crawler, 2, fetcher, TextSink::new(Vec::new())).unwrap();

    let report = engine.run().await.expect("Crawl failed");
    assert_eq!(report.state, CrawlState::Completed);

    let broken = &engine.results()[&format!("{}/recipe/broken/", base_url)];
    assert_eq!(broken.title, "Failed to load (HTTP 500)");
    assert!(broken.sections.is_empty());
    assert_eq!(
        engine.results()[&format!("{}/recipe/ok/", base_url)].title,
        "Ok"
    );
}

#[tokio::test]
async fn test_unavailable_seed_exhausts_frontier() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("recipes.txt");
    let config = create_test_config(&base_url, out_path.to_str().unwrap());

    let report = crawl(&config, 3).await.expect("Crawl failed");

    assert_eq!(report.state, CrawlState::Exhausted);
    assert_eq!(report.recipes_found, 0);
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "");
}

#[tokio::test]
async fn test_crawl_follows_recipe_pages_breadth_first() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/recipe/a/">A</a>"#).await;
    mount_page(
        &mock_server,
        "/recipe/a/",
        &format!(
            r#"{}<a href="/recipe/b/">B</a><a href="/recipe/a/">A</a><a href="/">Home</a>"#,
            recipe_body("A")
        ),
    )
    .await;
    mount_page(&mock_server, "/recipe/b/", &recipe_body("B")).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&base_url, dir.path().join("r.txt").to_str().unwrap());
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let mut engine =
        CrawlEngine::new(&config.crawler, 10, fetcher, TextSink::new(Vec::new())).unwrap();

    let report = engine.run().await.expect("Crawl failed");

    assert_eq!(report.state, CrawlState::Exhausted);
    let titles: Vec<_> = engine
        .results()
        .values()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert_eq!(report.pages_crawled, 3);
}

#[tokio::test]
async fn test_user_agent_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipe/1/"))
        .and(header("user-agent", "TestAgent/1.0"))
        .respond_with(html(&recipe_body("Agent")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "unused.txt");
    let fetcher = HttpFetcher::new(&config.http).unwrap();

    let result = fetcher
        .fetch_page(&format!("{}/recipe/1/", mock_server.uri()))
        .await;
    assert!(matches!(result, FetchResult::Success { status_code: 200, .. }));
}

#[tokio::test]
async fn test_politeness_delay_before_every_request() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", "<p>Home.</p>").await;

    let mut config = create_test_config(&mock_server.uri(), "unused.txt");
    config.http.politeness_delay = 150;
    let fetcher = HttpFetcher::new(&config.http).unwrap();

    let start = Instant::now();
    for _ in 0..2 {
        let result = fetcher.fetch_page(&format!("{}/", mock_server.uri())).await;
        assert!(result.is_success());
    }

    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_not_found_is_http_error() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri(), "unused.txt");
    let fetcher = HttpFetcher::new(&config.http).unwrap();

    // No mocks mounted: wiremock answers 404
    let result = fetcher
        .fetch_page(&format!("{}/recipe/missing/", mock_server.uri()))
        .await;
    assert!(matches!(result, FetchResult::HttpError { status_code: 404 }));
}
