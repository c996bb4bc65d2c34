//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn unthrottled() -> HttpClientConfig {
    HttpClientConfig {
        rate_limit: None,
        ..HttpClientConfig::default()
    }
}

fn client() -> HttpClient {
    HttpClient::new(&unthrottled(), AuthConfig::None).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::default()));
    assert!(config.user_agent.starts_with("cloudflare-custom-hostname/"));
}

#[test]
fn test_request_config_query() {
    let request = RequestConfig::new()
        .query("page", "1")
        .query_opt("hostname", Some("app.example.com"))
        .query_opt("status", None);

    assert_eq!(
        request.query,
        vec![
            ("page".to_string(), "1".to_string()),
            ("hostname".to_string(), "app.example.com".to_string()),
        ]
    );
}

#[test]
fn test_debug_reports_throttling() {
    assert!(format!("{:?}", client()).contains("has_rate_limiter: false"));
    let throttled = HttpClient::new(&HttpClientConfig::default(), AuthConfig::None).unwrap();
    assert!(format!("{throttled:?}").contains("has_rate_limiter: true"));
}

#[tokio::test]
async fn test_get_json_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones/z1/custom_hostnames"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": 42})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let data: Value = client()
        .get_json(
            &format!("{}/zones/z1/custom_hostnames", mock_server.uri()),
            RequestConfig::new().query("page", "2").query("per_page", "50"),
        )
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_get_json_applies_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(
        &unthrottled(),
        AuthConfig::ApiToken {
            token: "tok-123".to_string(),
        },
    )
    .unwrap();

    let data: Value = client
        .get_json(
            &format!("{}/user/tokens/verify", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap();
    assert_eq!(data["success"], true);
}

#[tokio::test]
async fn test_404_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones/z1/custom_hostnames/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&mock_server)
        .await;

    let err = client()
        .get_json::<Value>(
            &format!("{}/zones/z1/custom_hostnames/missing", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap_err();

    match &err {
        Error::HttpStatus { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "not here");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client()
        .get_json::<Value>(&format!("{}/zones", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let err = client()
        .get_json::<Value>(&format!("{}/zones", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}
