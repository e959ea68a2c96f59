//! Integration tests for the request pipeline.
//!
//! These tests drive the client against a wiremock server and verify
//! header propagation, debug logging, cancellation, deadlines and the
//! response body limit.

mod common;

use std::error::Error as _;
use std::sync::Arc;
use std::time::Duration;

use creem::clients::{Context, HttpMethod, SDK_VERSION, USER_AGENT};
use creem::{CreemError, DebugSwitch, TransportError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, recording_client, RecordingLogger, API_KEY};

const PRODUCT_BODY: &str = r#"{"data":{"id":"prod_1","name":"Pro","price":9.99,"currency":"USD"}}"#;

// ============================================================================
// Mandatory and custom headers
// ============================================================================

#[tokio::test]
async fn test_every_request_carries_api_key_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/products/prod_1"))
        .and(header("x-api-key", API_KEY))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .get_product(&Context::background(), "prod_1")
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.name, "Pro");
}

#[tokio::test]
async fn test_custom_headers_are_sent_and_win_collisions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/products/prod_1"))
        .and(header("x-tenant", "acme"))
        .and(header("x-api-key", "override-key"))
        .and(header("content-type", "application/vnd.creem+json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_request_header("X-Tenant", Some("acme"));
    client.set_request_header("X-API-KEY", Some("override-key"));
    client.set_request_header("content-type", Some("application/vnd.creem+json"));

    let response = client
        .get_product(&Context::background(), "prod_1")
        .await
        .unwrap();
    assert_eq!(response.code, 0);
}

#[tokio::test]
async fn test_default_engine_sends_sdk_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/products/prod_1"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .get_product(&Context::background(), "prod_1")
        .await
        .unwrap();

    assert!(response.is_success());
    assert!(USER_AGENT.contains(SDK_VERSION));
}

#[tokio::test]
async fn test_custom_user_agent_header_replaces_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/products/prod_1"))
        .and(header("user-agent", "acme-billing/2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_request_header("User-Agent", Some("acme-billing/2.1"));

    let response = client
        .get_product(&Context::background(), "prod_1")
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_cleared_headers_are_not_sent() {
    let (client, engine) = recording_client();
    client.set_request_header("X-Tenant", Some("acme"));
    client.clear_request_header();

    client
        .exchange::<()>(&Context::background(), HttpMethod::Get, "/v1/ping", None)
        .await
        .unwrap();

    let request = engine.last_request().unwrap();
    assert!(request.header("x-tenant").is_none());
    assert_eq!(request.header("x-api-key"), Some(API_KEY));
    assert_eq!(request.url, "https://api.creem.io/v1/ping");
}

#[tokio::test]
async fn test_post_without_body_sends_no_body_but_json_content_type() {
    let (client, engine) = recording_client();

    client
        .exchange::<()>(&Context::background(), HttpMethod::Post, "/v1/x", None)
        .await
        .unwrap();

    let request = engine.last_request().unwrap();
    assert!(request.body.is_none());
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.method, HttpMethod::Post);
}

#[tokio::test]
async fn test_path_is_appended_verbatim() {
    let (client, engine) = recording_client();
    client.set_proxy_url("https://proxy.internal/creem");

    client
        .exchange::<()>(
            &Context::background(),
            HttpMethod::Get,
            "/v1/products?limit=5&status=active",
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        engine.last_request().unwrap().url,
        "https://proxy.internal/creem/v1/products?limit=5&status=active"
    );
}

// ============================================================================
// Debug logging
// ============================================================================

#[tokio::test]
async fn test_debug_on_emits_exactly_two_lines() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/licenses/validate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"data":{"valid":true,"message":"ok"}}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let logger = Arc::new(RecordingLogger::default());
    client.set_logger(logger.clone());
    client.set_debug_switch(DebugSwitch::On);

    let request = creem::rest::resources::LicenseValidateRequest {
        license_key: "LIC-1".to_string(),
    };
    let response = client
        .validate_license(&Context::background(), &request)
        .await
        .unwrap();
    assert!(response.valid);

    let lines = logger.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!(
            "Creem_Request: {}/v1/licenses/validate, Body: {{\"license_key\":\"LIC-1\"}}",
            server.uri()
        )
    );
    assert_eq!(
        lines[1],
        r#"Creem_Response: {"data":{"valid":true,"message":"ok"}}"#
    );
}

#[tokio::test]
async fn test_debug_on_without_body_logs_url_only() {
    let (client, _engine) = recording_client();
    let logger = Arc::new(RecordingLogger::default());
    client.set_logger(logger.clone());
    client.set_debug_switch(true);

    client
        .exchange::<()>(&Context::background(), HttpMethod::Get, "/v1/ping", None)
        .await
        .unwrap();

    assert_eq!(
        logger.lines(),
        vec![
            "Creem_Request: https://api.creem.io/v1/ping".to_string(),
            "Creem_Response: {}".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_debug_off_emits_nothing() {
    let (client, _engine) = recording_client();
    let logger = Arc::new(RecordingLogger::default());
    client.set_logger(logger.clone());

    client
        .exchange::<()>(&Context::background(), HttpMethod::Get, "/v1/ping", None)
        .await
        .unwrap();
    client.set_debug_switch(DebugSwitch::Off);
    client
        .exchange::<()>(&Context::background(), HttpMethod::Get, "/v1/ping", None)
        .await
        .unwrap();

    assert!(logger.lines().is_empty());
}

// ============================================================================
// Cancellation and deadlines
// ============================================================================

#[tokio::test]
async fn test_cancelled_context_fails_before_the_engine_is_called() {
    let (client, engine) = recording_client();
    let (ctx, cancel) = Context::with_cancel();
    cancel.cancel();

    let error = client.get_customer(&ctx, "cust_1").await.unwrap_err();

    assert!(error.to_string().starts_with("http.Do Error:"));
    assert!(matches!(error, CreemError::Http(TransportError::Canceled)));
    let source = error.source().unwrap();
    assert!(matches!(
        source.downcast_ref::<TransportError>(),
        Some(TransportError::Canceled)
    ));
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_cancel_during_exchange_aborts_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/subscriptions/sub_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"data":{"id":"sub_1"}}"#)
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (ctx, cancel) = Context::with_cancel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
    });

    let error = client.get_subscription(&ctx, "sub_1").await.unwrap_err();
    assert!(matches!(error, CreemError::Http(TransportError::Canceled)));
    assert!(error.to_string().starts_with("http.Do Error: "));
}

#[tokio::test]
async fn test_deadline_during_exchange_reports_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/discount-codes/dc_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"data":{"id":"dc_1"}}"#)
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = Context::with_timeout(Duration::from_millis(100));

    let error = client.get_discount_code(&ctx, "dc_1").await.unwrap_err();
    assert!(matches!(
        error,
        CreemError::Http(TransportError::DeadlineExceeded)
    ));
    assert!(error.transport().unwrap().is_context_done());
}

// ============================================================================
// Body size limit
// ============================================================================

#[tokio::test]
async fn test_oversized_response_body_is_a_transport_error() {
    let server = MockServer::start().await;
    let big = format!(r#"{{"data":{{"id":"{}"}}}}"#, "x".repeat(2 * 1024 * 1024));
    Mock::given(method("GET"))
        .and(path("/v1/products/prod_big"))
        .respond_with(ResponseTemplate::new(200).set_body_string(big))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_body_size(1);

    let error = client
        .get_product(&Context::background(), "prod_big")
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        CreemError::Http(TransportError::BodyTooLarge { limit: 1_048_576 })
    ));
}

#[tokio::test]
async fn test_response_within_limit_is_read_in_full() {
    let server = MockServer::start().await;
    let name = "y".repeat(512 * 1024);
    let body = format!(r#"{{"data":{{"id":"prod_ok","name":"{name}"}}}}"#);
    Mock::given(method("GET"))
        .and(path("/v1/products/prod_ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_body_size(1);

    let response = client
        .get_product(&Context::background(), "prod_ok")
        .await
        .unwrap();
    assert_eq!(response.name.len(), 512 * 1024);
}

// ============================================================================
// Transport failures
// ============================================================================

#[tokio::test]
async fn test_unreachable_host_is_wrapped_transport_error() {
    let client = creem::CreemClient::new("k", "s", true, []).unwrap();
    client.set_proxy_url("http://127.0.0.1:1");

    let error = client
        .get_product(&Context::background(), "prod_1")
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("http.Do Error: "));
    assert!(matches!(
        error,
        CreemError::Http(TransportError::Request(_))
    ));
}
