//! Integration tests for the audit
//!
//! These tests use wiremock to serve listing and detail pages and run
//! the full audit end-to-end.

use datasheet_audit::config::Config;
use datasheet_audit::crawler::{audit, CrawlProgress, LogReporter, ProgressReporter};
use datasheet_audit::input::AuditInput;
use datasheet_audit::{AuditError, ClassificationResult, DatasheetStatus};
use std::sync::Mutex;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing the search endpoint at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.search_url = format!("{}/search/", base_url);
    config
}

/// Renders one product container
fn product(article: &str, documented: bool, detail_href: Option<&str>) -> String {
    let indicator = if documented {
        r#"<div class="b-product-list__icon" title="Документация"></div>"#
    } else {
        ""
    };
    let link = detail_href
        .map(|href| format!(r#"<a class="h4" href="{}">{}</a>"#, href, article))
        .unwrap_or_default();

    format!(
        r#"<div class="b-product-list__item">
            {}
            <div class="product-model">Артикул производителя: {}</div>
            {}
        </div>"#,
        link, article, indicator
    )
}

/// Renders a listing page with an optional pagination control
fn listing(products: &[String], pagination: Option<&str>) -> String {
    format!(
        "<html><body><div class=\"b-product-list\">{}</div>{}</body></html>",
        products.concat(),
        pagination.unwrap_or("")
    )
}

fn detail(datasheet_href: Option<&str>) -> String {
    let link = datasheet_href
        .map(|href| format!(r#"<a class="tab-link" href="{}">Datasheet</a>"#, href))
        .unwrap_or_default();
    format!("<html><body><h1>Product</h1>{}</body></html>", link)
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

async fn mount_detail(server: &MockServer, route: &str, datasheet_href: Option<&str>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(detail(datasheet_href)))
        .mount(server)
        .await;
}

fn row(article: &str, status: DatasheetStatus) -> ClassificationResult {
    ClassificationResult {
        article: article.to_string(),
        status,
    }
}

/// Records every progress callback
#[derive(Default)]
struct RecordingReporter {
    total: Mutex<Option<usize>>,
    pages: Mutex<Vec<usize>>,
    finished: Mutex<bool>,
}

impl ProgressReporter for RecordingReporter {
    fn on_start(&self, total_pages: usize) {
        *self.total.lock().unwrap() = Some(total_pages);
    }

    fn on_page(&self, progress: &CrawlProgress) {
        self.pages.lock().unwrap().push(progress.current_page);
    }

    fn on_finish(&self, _progress: &CrawlProgress) {
        *self.finished.lock().unwrap() = true;
    }
}

#[tokio::test]
async fn test_full_audit_across_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Page 1: two numbered pages plus prev/next controls
    let page1 = listing(
        &[
            product("A1", false, Some("/product/a1")),
            product("B2", true, Some("/product/b2")),
            product("C3", true, Some("/product/c3")),
            product("D4", true, None),
        ],
        Some(
            r#"<ul class="pagination">
                <li><span>&lt;</span></li>
                <li class="active"><span>1</span></li>
                <li><a href="/search/?page=2">2</a></li>
                <li><a href="/search/?page=2">&gt;</a></li>
            </ul>"#,
        ),
    );

    // Page 2: last page, the next control is not a link
    let page2 = listing(
        &[
            product("E5", true, Some("/product/e5")),
            product("A1", false, None),
        ],
        Some(
            r#"<ul class="pagination">
                <li><a href="/search/?search=relay">&lt;</a></li>
                <li><a href="/search/?search=relay">1</a></li>
                <li class="active"><span>2</span></li>
                <li><span>&gt;</span></li>
            </ul>"#,
        ),
    );

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("search", "relay"))
        .and(query_param("limit", "100"))
        .and(query_param("showcase", "true"))
        .respond_with(html(page1))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("page", "2"))
        .respond_with(html(page2))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_detail(&mock_server, "/product/b2", Some("/files/Datasheet-B2.pdf")).await;
    mount_detail(&mock_server, "/product/c3", Some("/files/old_C3.pdf")).await;
    mount_detail(&mock_server, "/product/e5", None).await;

    // A1 has no indicator: its detail page must never be requested
    Mock::given(method("GET"))
        .and(path("/product/a1"))
        .respond_with(html(detail(None)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let reporter = RecordingReporter::default();
    let report = audit(
        create_test_config(&base_url),
        &AuditInput::Query("relay".to_string()),
        &reporter,
    )
    .await
    .expect("Audit failed");

    assert_eq!(report.pages, 2);
    assert_eq!(report.products, 6);
    assert_eq!(
        report.results,
        vec![
            row("A1", DatasheetStatus::Missing),
            row("C3", DatasheetStatus::Outdated),
            row("D4", DatasheetStatus::Missing),
            row("E5", DatasheetStatus::Missing),
            row("A1", DatasheetStatus::Missing),
        ]
    );

    assert_eq!(*reporter.total.lock().unwrap(), Some(2));
    assert_eq!(*reporter.pages.lock().unwrap(), vec![1, 2]);
    assert!(*reporter.finished.lock().unwrap());
}

#[tokio::test]
async fn test_results_follow_page_order_not_completion_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let page = listing(
        &[
            product("SLOW", true, Some("/product/slow")),
            product("FAST", true, Some("/product/fast")),
        ],
        None,
    );

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html(page))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/product/slow"))
        .respond_with(html(detail(Some("/files/slow_v1.pdf"))).set_delay(Duration::from_millis(300)))
        .mount(&mock_server)
        .await;

    mount_detail(&mock_server, "/product/fast", Some("/files/fast_v1.pdf")).await;

    let report = audit(
        create_test_config(&base_url),
        &AuditInput::Query("mixed".to_string()),
        &LogReporter,
    )
    .await
    .expect("Audit failed");

    assert_eq!(report.pages, 1);
    assert_eq!(
        report.results,
        vec![
            row("SLOW", DatasheetStatus::Outdated),
            row("FAST", DatasheetStatus::Outdated),
        ]
    );
}

#[tokio::test]
async fn test_failed_detail_page_aborts_audit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let page = listing(
        &[
            product("OK1", false, None),
            product("BROKEN", true, Some("/product/broken")),
        ],
        None,
    );

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html(page))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/product/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = audit(
        create_test_config(&base_url),
        &AuditInput::Query("x".to_string()),
        &LogReporter,
    )
    .await;

    match result {
        Err(AuditError::Status { url, status }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/product/broken"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_article_label_aborts_audit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html(
            r#"<div class="b-product-list__item"><span>no label</span></div>"#.to_string(),
        ))
        .mount(&mock_server)
        .await;

    let result = audit(
        create_test_config(&base_url),
        &AuditInput::Query("x".to_string()),
        &LogReporter,
    )
    .await;

    assert!(matches!(result, Err(AuditError::HtmlParse { .. })));
}

#[tokio::test]
async fn test_empty_query_issues_no_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let report = audit(
        create_test_config(&base_url),
        &AuditInput::Query(String::new()),
        &LogReporter,
    )
    .await
    .expect("Audit failed");

    assert!(report.is_empty());
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_category_listing_without_pagination() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let page = listing(
        &[
            product("CUR", true, Some("/product/cur")),
            product("NONE", false, None),
        ],
        None,
    );

    Mock::given(method("GET"))
        .and(path("/catalog/relays/"))
        .and(query_param("limit", "100"))
        .and(query_param("showcase", "true"))
        .respond_with(html(page))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_detail(&mock_server, "/product/cur", Some("/files/Datasheet-CUR.pdf")).await;

    let reporter = RecordingReporter::default();
    let report = audit(
        create_test_config(&base_url),
        &AuditInput::Category(format!("{}/catalog/relays/", base_url)),
        &reporter,
    )
    .await
    .expect("Audit failed");

    assert_eq!(report.pages, 1);
    assert_eq!(report.results, vec![row("NONE", DatasheetStatus::Missing)]);
    assert_eq!(*reporter.total.lock().unwrap(), Some(1));
}

#[tokio::test]
async fn test_self_referencing_pagination_terminates() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let page = listing(
        &[product("LOOP", false, None)],
        Some(r#"<ul class="pagination"><li>&lt;</li><li><a href="/search/?search=loop&amp;limit=100&amp;showcase=true">&gt;</a></li></ul>"#),
    );

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html(page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = audit(
        create_test_config(&base_url),
        &AuditInput::Query("loop".to_string()),
        &LogReporter,
    )
    .await
    .expect("Audit failed");

    assert_eq!(report.pages, 1);
    assert_eq!(report.results, vec![row("LOOP", DatasheetStatus::Missing)]);
}

#[tokio::test]
async fn test_failed_listing_page_aborts_audit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = audit(
        create_test_config(&base_url),
        &AuditInput::Query("relay".to_string()),
        &LogReporter,
    )
    .await;

    match result {
        Err(AuditError::Status { url, status }) => {
            assert_eq!(status, 503);
            assert!(url.contains("/search/?search=relay"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Nothing listens on port 1
    let result = audit(
        create_test_config("http://127.0.0.1:1"),
        &AuditInput::Query("relay".to_string()),
        &LogReporter,
    )
    .await;

    match result {
        Err(AuditError::Http { url, .. }) => assert!(url.starts_with("http://127.0.0.1:1/search/")),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_audit_runs_on_spawned_task() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html(listing(&[product("T1", false, None)], None)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url);
    let handle = tokio::spawn(async move {
        let reporter = RecordingReporter::default();
        let input = AuditInput::Query("spawned".to_string());
        audit(config, &input, &reporter).await
    });

    let report = handle
        .await
        .expect("Task panicked")
        .expect("Audit failed");
    assert_eq!(report.results, vec![row("T1", DatasheetStatus::Missing)]);
}
