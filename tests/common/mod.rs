//! Shared helpers for the HTTP integration tests.

use beepsend::{ApiToken, BeepsendClient};
use wiremock::MockServer;

pub const TOKEN: &str = "abc123";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client using the default reqwest connector, pointed at `server`.
pub fn client_for(server: &MockServer) -> BeepsendClient {
    BeepsendClient::builder(ApiToken::new(TOKEN).unwrap())
        .base_url(server.uri())
        .api_version("2")
        .build()
        .expect("client should build")
}
