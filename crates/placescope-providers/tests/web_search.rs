//! Integration tests for `WebSearchClient` using wiremock HTTP mocks.

use placescope_core::{KeyType, SearchParams, SourceTag};
use placescope_providers::{fallback, LocationProvider, WebSearchClient, WebSearchConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(base_url: &str, api_key: Option<&str>) -> WebSearchConfig {
    WebSearchConfig {
        api_key: api_key.map(str::to_string),
        engine_id: Some("engine-1".to_string()),
        base_url: base_url.to_string(),
        city: "Almaty".to_string(),
        region: "Kazakhstan".to_string(),
        timeout_secs: 5,
        user_agent: "placescope-test".to_string(),
    }
}

#[tokio::test]
async fn search_scrapes_titles_and_snippets() {
    let server = MockServer::start().await;

    let body = json!({
        "items": [
            {
                "title": "Navat – чайхана | Restaurant Guru",
                "snippet": "Чайхана в Алматы. Адрес: улица Панфилова, 109. Открыто до 23:00"
            },
            {
                "title": "Dastarkhan - Astana",
                "snippet": "Restaurant in Astana with national cuisine"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", "test-key"))
        .and(query_param("cx", "engine-1"))
        .and(query_param("q", "navat restaurant Almaty Kazakhstan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = WebSearchClient::new(config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let results = client
        .search(&SearchParams::text("navat"))
        .await
        .expect("never rejects");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "web-search-1");
    assert_eq!(results[0].name, "Navat");
    assert_eq!(results[0].address, "улица Панфилова, 109");
    assert_eq!(results[0].city, "Алматы");
    assert_eq!(results[0].source, SourceTag::WebSearch);

    assert_eq!(results[1].name, "Dastarkhan");
    assert_eq!(results[1].address, "Almaty, Kazakhstan");
    assert_eq!(results[1].city, "Astana");
    assert!((results[1].coordinates.lat - 51.1694).abs() < 1e-9);
}

#[tokio::test]
async fn empty_items_fall_back() {
    let server = MockServer::start().await;

    let body = json!({ "kind": "customsearch#search" });
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = WebSearchClient::new(config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let results = client
        .search(&SearchParams::text("navat"))
        .await
        .expect("never rejects");

    assert_eq!(results, fallback::web_search_results());
}

#[tokio::test]
async fn http_failure_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = WebSearchClient::new(config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let results = client
        .search(&SearchParams::text("navat"))
        .await
        .expect("never rejects");

    assert_eq!(results, fallback::web_search_results());
    assert!(client.status().working);
}

#[tokio::test]
async fn missing_key_reports_demo_mode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = WebSearchClient::new(config(&server.uri(), None))
        .expect("client construction should not fail");
    let results = client
        .search(&SearchParams::text("navat"))
        .await
        .expect("never rejects");

    assert_eq!(results.len(), 2);
    let status = client.status();
    assert!(!status.working);
    assert_eq!(status.key_type, KeyType::None);
}
