//! Shared helpers for the integration tests.
//!
//! Two kinds of servers back the tests: [`fake_server::FakeServer`], a small
//! stateful stand-in for the identity server used for behavioural tests, and
//! `httpmock` mocks for exact wire checks.

#![allow(dead_code)]

pub mod fake_server;
pub mod fixtures;

use base64::{Engine, engine::general_purpose::STANDARD};
use casdoor_sdk::Client;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const ORGANIZATION: &str = "built-in";
pub const APPLICATION: &str = "app-built-in";

/// Install a test logger once; output shows with `--nocapture`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A client for `endpoint` with the test credentials.
pub fn test_client(endpoint: &str) -> Client {
    test_client_with_certificate(endpoint, "")
}

/// A client for `endpoint` verifying tokens with `certificate`.
pub fn test_client_with_certificate(endpoint: &str, certificate: &str) -> Client {
    init_logging();
    Client::new(
        endpoint,
        CLIENT_ID,
        CLIENT_SECRET,
        certificate,
        ORGANIZATION,
        APPLICATION,
    )
}

/// `Authorization` header value for the test credentials.
pub fn basic_auth_header() -> String {
    basic_auth_for(CLIENT_ID, CLIENT_SECRET)
}

pub fn basic_auth_for(id: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{id}:{secret}")))
}
