//! Integration tests for the HTTP client functionality.
//!
//! These tests verify client configuration, request building, and how
//! responses and transport failures are surfaced, against a mock server.

use std::time::Duration;

use printify_api::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, API_BASE_PATH};
use printify_api::{AccessToken, HostUrl, PrintifyConfig};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing at the given host.
fn create_test_config(host: &str, access_token: &str) -> PrintifyConfig {
    PrintifyConfig::builder()
        .access_token(AccessToken::new(access_token).unwrap())
        .host(HostUrl::new(host).unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_client_default_headers() {
    let config = create_test_config("https://api.printify.com", "my-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let headers = client.default_headers();

    let user_agent = headers.get("User-Agent").unwrap();
    assert!(user_agent.contains("Printify API Library"));
    assert!(user_agent.contains("Rust"));

    assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
    assert_eq!(
        headers.get("Authorization"),
        Some(&"Bearer my-token".to_string())
    );
}

#[test]
fn test_multiple_clients_with_different_tokens_are_independent() {
    let client1 = HttpClient::new(
        API_BASE_PATH,
        &create_test_config("https://api.printify.com", "token-1"),
    )
    .unwrap();
    let client2 = HttpClient::new(
        API_BASE_PATH,
        &create_test_config("http://localhost:8080", "token-2"),
    )
    .unwrap();

    assert_eq!(client1.base_uri(), "https://api.printify.com");
    assert_eq!(client2.base_uri(), "http://localhost:8080");
    assert_eq!(
        client1.default_headers().get("Authorization"),
        Some(&"Bearer token-1".to_string())
    );
    assert_eq!(
        client2.default_headers().get("Authorization"),
        Some(&"Bearer token-2".to_string())
    );
}

// ============================================================================
// Round-trip Tests
// ============================================================================

#[tokio::test]
async fn test_request_sends_headers_and_returns_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops.json"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-42")
                .set_body_string(r#"[{"id":1,"title":"My Store"}]"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "shops.json")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.code, 200);
    assert_eq!(response.request_id(), Some("req-42"));
    assert_eq!(response.body, r#"[{"id":1,"title":"My Store"}]"#);
}

#[tokio::test]
async fn test_request_with_body_sets_json_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/1/products.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"title":"Mug"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"p1"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Post, "shops/1/products.json")
        .body(r#"{"title":"Mug"}"#)
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.body, r#"{"id":"p1"}"#);
}

#[tokio::test]
async fn test_non_success_status_returns_response_error_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/1/orders/missing.json"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-404")
                .set_body_string(r#"{"error":"Not found"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "shops/1/orders/missing.json")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body, r#"{"error":"Not found"}"#);
            assert_eq!(e.request_id.as_deref(), Some("req-404"));
        }
        other => panic!("Expected HttpError::Response, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "shops.json")
        .build()
        .unwrap();
    let result = client.request(request).await;

    assert_eq!(result.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/shops/1/products/p1.json"))
        .and(header("X-Custom-Header", "custom-value"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Delete, "shops/1/products/p1.json")
        .header("X-Custom-Header", "custom-value")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_extra_authorization_header_never_replaces_configured_token() {
    let mock_server = MockServer::start().await;

    // The exact matcher only accepts a single header value
    Mock::given(method("GET"))
        .and(path("/v1/shops.json"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    for name in ["Authorization", "authorization"] {
        let request = HttpRequest::builder(HttpMethod::Get, "shops.json")
            .header(name, "Bearer other")
            .build()
            .unwrap();
        let response = client.request(request).await.unwrap();
        assert_eq!(response.body, "[]", "{name}");
    }
}

#[tokio::test]
async fn test_extra_header_names_merge_case_insensitively() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/1/orders.json"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Post, "shops/1/orders.json")
        .body("{}")
        .header("content-type", "application/json")
        .header("accept", "application/json")
        .build()
        .unwrap();

    assert!(client.request(request).await.is_ok());
}

// ============================================================================
// Transport Failure Tests
// ============================================================================

#[tokio::test]
async fn test_connection_failure_returns_network_error() {
    // Nothing listens on port 1
    let config = create_test_config("http://127.0.0.1:1", "test-token");
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "shops.json")
        .build()
        .unwrap();
    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[tokio::test]
async fn test_configured_timeout_abandons_slow_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops.json"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let config = PrintifyConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .host(HostUrl::new(mock_server.uri()).unwrap())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = HttpClient::new(API_BASE_PATH, &config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "shops.json")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("Expected timeout, got: {other:?}"),
    }
}
