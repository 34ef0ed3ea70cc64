use super::config::{validate_api_version, validate_base_url, ApiKey, ClientConfig};
use super::core::BundleUp;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable: an API key is the only
/// required input, everything else has a production default.
pub struct BundleUpBuilder {
    api_key: Option<String>,
    http_client: Option<reqwest::blocking::Client>,
    timeout: Option<Duration>,
    api_base_url: Option<String>,
    api_version: Option<String>,
    proxy_base_url: Option<String>,
    unify_base_url: Option<String>,
}

impl BundleUpBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            http_client: None,
            timeout: None,
            api_base_url: None,
            api_version: None,
            proxy_base_url: None,
            unify_base_url: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Share a caller-owned HTTP client (and its pool). `close` will leave it open.
    pub fn http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Per-request timeout for the owned pool. Ignored with [`http_client`](Self::http_client).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the resource API base URL (primarily for testing with mock servers).
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Override the proxy API base URL.
    pub fn proxy_base_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_base_url = Some(url.into());
        self
    }

    /// Override the unify API base URL.
    pub fn unify_base_url(mut self, url: impl Into<String>) -> Self {
        self.unify_base_url = Some(url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BundleUp> {
        let api_key = self.api_key.ok_or_else(|| {
            Error::configuration_with_context(
                "API key must be specified",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("builder"),
            )
        })?;
        let api_key = ApiKey::new(api_key)?;

        let defaults = ClientConfig::default();
        let config = ClientConfig {
            api_base_url: resolve_url(self.api_base_url, defaults.api_base_url, "api_base_url")?,
            api_version: match self.api_version {
                Some(v) => validate_api_version(&v)?,
                None => defaults.api_version,
            },
            proxy_base_url: resolve_url(
                self.proxy_base_url,
                defaults.proxy_base_url,
                "proxy_base_url",
            )?,
            unify_base_url: resolve_url(
                self.unify_base_url,
                defaults.unify_base_url,
                "unify_base_url",
            )?,
        };

        let (transport, owns_transport) = match self.http_client {
            Some(client) => {
                if self.timeout.is_some() {
                    warn!("timeout is ignored when a caller-supplied HTTP client is used");
                }
                (HttpTransport::from_client(client), false)
            }
            None => (HttpTransport::new(self.timeout)?, true),
        };

        debug!(
            api_base_url = %config.api_base_url,
            owns_transport,
            "bundleup client built"
        );
        Ok(BundleUp::from_parts(api_key, config, transport, owns_transport))
    }
}

impl Default for BundleUpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_url(value: Option<String>, default: String, field: &str) -> Result<String> {
    match value {
        Some(url) => validate_base_url(&url, field),
        None => Ok(default),
    }
}
