// Integration tests for `CatalogClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_api::{CatalogClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let client = CatalogClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn sample_body() -> serde_json::Value {
    json!([
        {
            "id": "dev-001",
            "name": "iPhone 13 Pro",
            "brand": "Apple",
            "price": 6200.0,
            "images": ["https://cdn.example/13pro-front.jpg", "https://cdn.example/13pro-back.jpg"],
            "basicDetails": { "brand": "Apple", "model": "iPhone 13 Pro", "color": "Sierra Blue", "storage": 256 },
            "condition": { "batteryHealth": "92%" }
        },
        {
            "id": "dev-002",
            "name": "Galaxy S21",
            "brand": "Samsung",
            "price": 3400.0,
            "basicDetails": { "brand": "Samsung", "model": "S21", "storage": 128 },
            "condition": { "batteryHealth": "85%" }
        }
    ])
}

// ── Happy path ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .mount(&server)
        .await;

    let products = client.list_devices().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "dev-001");
    assert_eq!(products[0].images.len(), 2);
    assert_eq!(products[0].basic_details.color.as_deref(), Some("Sierra Blue"));
    assert_eq!(products[1].basic_details.color, None);
    assert!(products[1].images.is_empty());
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;
    let client = CatalogClient::from_reqwest(
        &format!("{}/api", server.uri()),
        reqwest::Client::new(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let products = client.list_devices().await.unwrap();
    assert!(products.is_empty());
}

// ── Failure modes ───────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_reports_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.list_devices().await.unwrap_err();
    match err {
        Error::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_transient());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_malformed_body_reports_deserialization() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.list_devices().await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert!(body.contains("not json")),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
    assert!(!err.is_transient());
}

// ── Retry behavior ──────────────────────────────────────────────────

/// A failed fetch leaves the client reusable: invoking it again issues a
/// fresh request, and a now-healthy server satisfies it.
#[tokio::test]
async fn test_retry_reissues_fetch_after_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.list_devices().await.is_err());

    let products = client.list_devices().await.unwrap();
    assert_eq!(products.len(), 2);
}
