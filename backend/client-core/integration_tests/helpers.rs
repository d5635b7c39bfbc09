//! Test helpers for request-core integration tests.

use client_core::MdblistClient;

use common::RedactedApiKey;

use std::time::Duration;

use wiremock::MockServer;

pub const TEST_API_KEY: &str = "abc123";

/// Client pointed at a running mock server.
pub fn client_for(server: &MockServer) -> MdblistClient {
    MdblistClient::builder()
        .with_base_url(server.uri())
        .with_api_key(RedactedApiKey::new(TEST_API_KEY))
        .with_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build client for mock server")
}
