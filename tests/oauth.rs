//! Token endpoint exchanges.

mod common;

use casdoor_sdk::SdkError;
use common::test_client;
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_code_exchange_sends_credentials_in_form() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login/oauth/access_token")
                .header("content-type", "application/x-www-form-urlencoded")
                .body_contains("grant_type=authorization_code")
                .body_contains("code=abc123")
                .body_contains("redirect_uri=callback")
                .body_contains("state=app-built-in")
                .body_contains("client_id=test-client")
                .body_contains("client_secret=test-secret");
            then.status(200).json_body(json!({
                "access_token": "header.payload.signature",
                "id_token": "header.payload.signature",
                "refresh_token": "refresh-1",
                "token_type": "Bearer",
                "expires_in": 604800,
                "scope": "read"
            }));
        })
        .await;

    let client = test_client(&server.base_url());
    let token = assert_ok!(client.get_oauth_token("abc123", "app-built-in").await);

    mock.assert_async().await;
    assert_eq!(token.access_token, "header.payload.signature");
    assert_eq!(token.refresh_token, "refresh-1");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 604800);
    assert!(!token.is_expired());
}

#[tokio::test]
async fn test_code_exchange_without_state_omits_it() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login/oauth/access_token")
                .matches(|request| {
                    let body = request.body.clone().unwrap_or_default();
                    !String::from_utf8_lossy(&body).contains("state=")
                });
            then.status(200)
                .json_body(json!({"access_token": "token", "expires_in": 60}));
        })
        .await;

    let client = test_client(&server.base_url());
    assert_ok!(client.get_oauth_token("abc123", "").await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_in_band_error_yields_no_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login/oauth/access_token");
            then.status(200).json_body(json!({
                "access_token": "error: invalid_grant",
                "token_type": "",
                "expires_in": 0
            }));
        })
        .await;

    let client = test_client(&server.base_url());
    let error = assert_err!(client.get_oauth_token("used-code", "").await);
    assert!(matches!(error, SdkError::OAuth(_)));
    assert_eq!(error.to_string(), "invalid_grant");
}

#[tokio::test]
async fn test_error_body_on_bad_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login/oauth/access_token");
            then.status(400).json_body(json!({
                "error": "invalid_client",
                "error_description": "client_secret is invalid"
            }));
        })
        .await;

    let client = test_client(&server.base_url());
    let error = assert_err!(client.get_oauth_token("abc123", "").await);
    assert_eq!(error.to_string(), "client_secret is invalid");
}

#[tokio::test]
async fn test_server_failure_without_oauth_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login/oauth/access_token");
            then.status(500).body("internal error");
        })
        .await;

    let client = test_client(&server.base_url());
    let error = assert_err!(client.get_oauth_token("abc123", "").await);
    assert!(matches!(error, SdkError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_refresh_sends_refresh_grant() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login/oauth/refresh_token")
                .body_contains("grant_type=refresh_token")
                .body_contains("refresh_token=refresh-1")
                .body_contains("client_id=test-client");
            then.status(200).json_body(json!({
                "access_token": "fresh-token",
                "refresh_token": "refresh-2",
                "token_type": "Bearer",
                "expires_in": 3600
            }));
        })
        .await;

    let client = test_client(&server.base_url());
    let token = assert_ok!(client.refresh_oauth_token("refresh-1").await);

    mock.assert_async().await;
    assert_eq!(token.access_token, "fresh-token");
    assert_eq!(token.refresh_token, "refresh-2");
}

#[tokio::test]
async fn test_per_call_transport_is_used() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login/oauth/refresh_token");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"access_token": "late"}));
        })
        .await;

    let client = test_client(&server.base_url());
    let impatient = reqwest::Client::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let error = assert_err!(client.refresh_oauth_token_with("refresh-1", &impatient).await);
    assert!(matches!(error, SdkError::Http(ref e) if e.is_timeout()));

    let token = assert_ok!(client.refresh_oauth_token("refresh-1").await);
    assert_eq!(token.access_token, "late");
}

#[tokio::test]
async fn test_refresh_keeps_refresh_token_when_not_rotated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login/oauth/refresh_token");
            then.status(200).json_body(json!({
                "access_token": "fresh-token",
                "token_type": "Bearer",
                "expires_in": "3600"
            }));
        })
        .await;

    let client = test_client(&server.base_url());
    let token = assert_ok!(client.refresh_oauth_token("refresh-1").await);

    assert_eq!(token.access_token, "fresh-token");
    assert_eq!(token.refresh_token, "refresh-1");
    assert_eq!(token.expires_in, 3600);
}
