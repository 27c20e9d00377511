use foray_core::scan::{ScanOptions, execute_scan};
use foray_scanner::{ProbeResult, ScanConfig, ScanError};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options(target: String, wordlist: &[&str]) -> ScanOptions {
    ScanOptions {
        target,
        wordlist: wordlist.iter().map(|s| s.to_string()).collect(),
        config: ScanConfig {
            concurrency: 4,
            timeout: Duration::from_secs(5),
            ..ScanConfig::default()
        },
        show_progress_bars: false,
    }
}

fn result_urls(results: &[ProbeResult]) -> HashSet<String> {
    results.iter().map(|r| r.url.clone()).collect()
}

#[tokio::test]
async fn test_scan_respects_robots_and_status_filtering() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /admin\n"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/login.php"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/.env"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/plain"))
        .mount(&mock_server)
        .await;
    // Excluded by policy before any request; would 403 anyway
    Mock::given(method("HEAD"))
        .and(path("/admin/"))
        .respond_with(ResponseTemplate::new(403))
        .expect(0)
        .mount(&mock_server)
        .await;

    let results = execute_scan(
        options(mock_server.uri(), &["admin/", "login.php", ".env"]),
        None,
    )
    .await
    .unwrap();

    let expected: HashSet<String> = [
        format!("{}/login.php", mock_server.uri()),
        format!("{}/.env", mock_server.uri()),
    ]
    .into_iter()
    .collect();
    assert_eq!(result_urls(&results), expected);
    assert!(results.iter().all(|r| r.status_code == 200));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_scan_probes_sitemap_discovered_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let sitemap_xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
        <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\
          <url><loc>https://example.com/secret-backup.zip</loc></url>\
        </urlset>";
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_xml)
                .insert_header("content-type", "application/xml"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/secret-backup.zip"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "application/zip"))
        .mount(&mock_server)
        .await;
    // Wordlist entry unrelated to the sitemap, 404s via the default

    let results = execute_scan(options(mock_server.uri(), &["login.php"]), None)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].url,
        format!("{}/secret-backup.zip", mock_server.uri())
    );
    assert_eq!(results[0].content_type, "application/zip");
}

#[tokio::test]
async fn test_scan_reports_results_through_callback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/.git/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let seen: Arc<Mutex<Vec<ProbeResult>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let callback = Arc::new(move |result: ProbeResult| {
        sink.lock().unwrap().push(result);
    });

    let results = execute_scan(options(mock_server.uri(), &[".git/"]), Some(callback))
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(*seen, results);
}

#[tokio::test]
async fn test_scan_rejects_empty_target() {
    let result = execute_scan(options(String::new(), &["admin/"]), None).await;
    assert!(matches!(result, Err(ScanError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_scan_dedupes_sitemap_against_wordlist() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    // Sitemap lists the same path that the wordlist carries in absolute form
    let sitemap_xml = "<urlset><url><loc>https://example.com/dup</loc></url></urlset>";
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_xml))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/dup"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = execute_scan(
        options(mock_server.uri(), &["https://whatever.example/dup"]),
        None,
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    mock_server.verify().await;
}
