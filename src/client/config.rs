//! Client configuration: endpoint base URLs and the API credential.

use super::endpoint::{
    DEFAULT_API_BASE_URL, DEFAULT_API_VERSION, DEFAULT_PROXY_BASE_URL, DEFAULT_UNIFY_BASE_URL,
};
use super::validation::validate_non_empty_string;
use crate::utils::bearer_value;
use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::sync::Arc;

/// Base URLs and API version used to build every request URL.
///
/// Base URLs are stored without a trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api_version: String,
    pub proxy_base_url: String,
    pub unify_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            proxy_base_url: DEFAULT_PROXY_BASE_URL.to_string(),
            unify_base_url: DEFAULT_UNIFY_BASE_URL.to_string(),
        }
    }
}

/// Parse `value` as an absolute http(s) URL and return it without a trailing `/`.
pub(crate) fn validate_base_url(value: &str, field: &str) -> Result<String> {
    let parsed = url::Url::parse(value.trim()).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base URL {:?}: {}", value, e),
            ErrorContext::new()
                .with_field_path(field)
                .with_source("client_config"),
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported URL scheme {:?}", parsed.scheme()),
            ErrorContext::new()
                .with_field_path(field)
                .with_details("expected http or https")
                .with_source("client_config"),
        ));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(Error::configuration_with_context(
            "base URL must not carry a query or fragment",
            ErrorContext::new()
                .with_field_path(field)
                .with_source("client_config"),
        ));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// API version path segment, e.g. `v1`.
pub(crate) fn validate_api_version(value: &str) -> Result<String> {
    let trimmed = value.trim().trim_matches('/');
    validate_non_empty_string(trimmed, "api_version")?;
    Ok(trimmed.to_string())
}

/// Opaque API secret. Cheap to clone; never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_non_empty_string(&key, "api_key")?;
        bearer_value(&key)?;
        Ok(Self(Arc::from(key)))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
