//! Mock HTTP server setup for integration tests

use bundleup::BundleUp;
use mockito::{Mock, Server, ServerGuard};

pub const API_KEY: &str = "test-api-key";
pub const CONNECTION_ID: &str = "connection-id";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub fn new() -> Self {
        let server = Server::new();
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client whose resource, proxy and unify base URLs all point at the mock server.
    pub fn client(&self) -> BundleUp {
        BundleUp::builder()
            .api_key(API_KEY)
            .api_base_url(&self.base_url)
            .proxy_base_url(&self.base_url)
            .unify_base_url(&self.base_url)
            .build()
            .expect("client should build against mock server")
    }

    /// Create a mock for a JSON response, requiring the bearer token.
    pub fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Create a mock for a response with no body.
    pub fn mock_empty(&mut self, method: &str, path: &str, status: usize) -> Mock {
        self.server
            .mock(method, path)
            .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
            .with_status(status)
            .create()
    }
}

/// A base URL nothing listens on, for transport failures.
pub fn unreachable_client() -> BundleUp {
    BundleUp::builder()
        .api_key(API_KEY)
        .api_base_url("http://127.0.0.1:1")
        .proxy_base_url("http://127.0.0.1:1")
        .unify_base_url("http://127.0.0.1:1")
        .build()
        .expect("client should build")
}
