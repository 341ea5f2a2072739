//! Integration tests for the inspector
//!
//! These tests use wiremock to serve pages and exercise the default HTTP
//! markup source end-to-end.

use meta_inspector::{
    Field, FetchError, InspectionState, InspectorError, InspectorOptions, MetaInspector,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Article</title>
    <meta name="keywords" content="news,tech">
    <meta name="author" content="A. Writer">
    <meta property="og:title" content="Article OG">
    <meta property="og:image" content="/cover.jpg">
    <link rel="alternate" type="application/atom+xml" href="/atom.xml">
</head>
<body>
    <p>Short intro.</p>
    <p>This paragraph is long enough to serve as the page description because it runs well past the one hundred and twenty character minimum.</p>
    <a href="/next">Next</a>
    <a href="mailto:editor@example.com">Mail</a>
    <img src="figure.png">
</body>
</html>"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn serve(mock_server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_full_inspection_over_http() {
    init_tracing();
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/article", ARTICLE).await;

    let url = format!("{}/article", mock_server.uri());
    let mut inspector =
        MetaInspector::new(&url, InspectorOptions::default()).expect("Failed to create inspector");

    let record = inspector.inspect(None).await.expect("Inspection failed");

    assert_eq!(record.title(), Some("Article"));
    assert_eq!(record.charset(), Some("utf-8"));
    assert_eq!(record.author(), Some("A. Writer"));
    assert_eq!(record.keywords(), ["news".to_string(), "tech".to_string()]);
    assert_eq!(record.og_title(), Some("Article OG"));
    assert_eq!(record.og_type(), None);
    assert!(record.description().unwrap().starts_with("This paragraph is long"));
    assert_eq!(record.meta_description(), None);
    assert_eq!(
        record.links(),
        ["/next".to_string(), "mailto:editor@example.com".to_string()]
    );
    assert_eq!(record.feeds(), ["/atom.xml".to_string()]);

    // The root URL is scheme://host, so the mock server's port is not carried over
    assert_eq!(record.image(), Some("http://127.0.0.1/cover.jpg"));
    assert_eq!(record.images(), ["http://127.0.0.1/figure.png".to_string()]);

    assert_eq!(inspector.state(), InspectionState::Populated);
    assert_eq!(inspector.markup(), Some(ARTICLE));
}

#[tokio::test]
async fn test_default_headers_sent() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "MetaInspector/1.0"))
        .and(header("accept", "text/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>ok</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut inspector = MetaInspector::new(&mock_server.uri(), InspectorOptions::default())
        .expect("Failed to create inspector");
    let record = inspector.inspect(None).await.expect("Inspection failed");
    assert_eq!(record.title(), Some("ok"));
}

#[tokio::test]
async fn test_custom_headers_sent() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "CustomBot/3.1"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>custom</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = meta_inspector::config::parse_options(
        r#"
[headers]
User-Agent = "CustomBot/3.1"
X-Trace = "abc"
"#,
    )
    .expect("Failed to parse options");

    let mut inspector =
        MetaInspector::new(&mock_server.uri(), options).expect("Failed to create inspector");
    let record = inspector.inspect(None).await.expect("Inspection failed");
    assert_eq!(record.title(), Some("custom"));
}

#[tokio::test]
async fn test_non_success_status_fails_without_populating() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    let mut inspector =
        MetaInspector::new(&url, InspectorOptions::default()).expect("Failed to create inspector");

    let result = inspector.inspect(None).await;
    assert!(matches!(
        result,
        Err(InspectorError::Fetch(FetchError::Status { status: 404, .. }))
    ));

    assert_eq!(inspector.state(), InspectionState::Unfetched);
    assert!(!inspector.record().is_extracted(Field::Title));
    assert!(inspector.markup().is_none());
}

#[tokio::test]
async fn test_timeout_reported() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>late</title>")
                .set_delay(Duration::from_millis(2000)),
        )
        .mount(&mock_server)
        .await;

    let options = InspectorOptions {
        timeout_ms: 100,
        ..InspectorOptions::default()
    };
    let url = format!("{}/slow", mock_server.uri());
    let mut inspector = MetaInspector::new(&url, options).expect("Failed to create inspector");

    let result = inspector.inspect(None).await;
    assert!(matches!(
        result,
        Err(InspectorError::Fetch(FetchError::Timeout { .. }))
    ));
    assert_eq!(inspector.state(), InspectionState::Unfetched);
}

async fn mount_redirect_chain(mock_server: &MockServer) {
    let base_url = mock_server.uri();

    for (from, to) in [("/r1", "/r2"), ("/r2", "/r3"), ("/r3", "/final")] {
        Mock::given(method("GET"))
            .and(path(from))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("location", format!("{}{}", base_url, to).as_str()),
            )
            .mount(mock_server)
            .await;
    }

    serve(mock_server, "/final", "<title>Landed</title>").await;
}

#[tokio::test]
async fn test_redirects_followed_within_limit() {
    init_tracing();
    let mock_server = MockServer::start().await;
    mount_redirect_chain(&mock_server).await;

    let url = format!("{}/r1", mock_server.uri());
    let mut inspector =
        MetaInspector::new(&url, InspectorOptions::default()).expect("Failed to create inspector");

    let record = inspector.inspect(None).await.expect("Inspection failed");
    assert_eq!(record.title(), Some("Landed"));
}

#[tokio::test]
async fn test_redirect_limit_exceeded() {
    init_tracing();
    let mock_server = MockServer::start().await;
    mount_redirect_chain(&mock_server).await;

    let options = InspectorOptions {
        max_redirects: 1,
        ..InspectorOptions::default()
    };
    let url = format!("{}/r1", mock_server.uri());
    let mut inspector = MetaInspector::new(&url, options).expect("Failed to create inspector");

    let result = inspector.inspect(None).await;
    assert!(matches!(
        result,
        Err(InspectorError::Fetch(FetchError::RedirectLimit { .. }))
    ));
}

#[tokio::test]
async fn test_independent_inspections_run_concurrently() {
    init_tracing();
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/one", "<title>One</title>").await;
    serve(&mock_server, "/two", "<title>Two</title>").await;

    let mut first = MetaInspector::new(
        &format!("{}/one", mock_server.uri()),
        InspectorOptions::default(),
    )
    .expect("Failed to create inspector");
    let mut second = MetaInspector::new(
        &format!("{}/two", mock_server.uri()),
        InspectorOptions::default(),
    )
    .expect("Failed to create inspector");

    let (a, b) = tokio::join!(first.inspect(None), second.inspect(None));

    assert_eq!(a.expect("First inspection failed").title(), Some("One"));
    assert_eq!(b.expect("Second inspection failed").title(), Some("Two"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    init_tracing();
    let mock_server = MockServer::builder().start().await;
    let url = format!("{}/gone", mock_server.uri());
    drop(mock_server);

    let mut inspector =
        MetaInspector::new(&url, InspectorOptions::default()).expect("Failed to create inspector");

    let result = inspector.inspect(None).await;
    assert!(matches!(
        result,
        Err(InspectorError::Fetch(FetchError::Transport { .. }))
    ));
    assert_eq!(inspector.state(), InspectionState::Unfetched);
}
