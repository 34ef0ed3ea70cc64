//! Header construction and merging.
//!
//! Header names are case-insensitive: merging goes through [`HeaderMap`], so a
//! later layer replaces an earlier entry regardless of the spelling either used.

use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::collections::HashMap;

/// Header naming the upstream connection for proxy and unify requests.
pub const CONNECTION_ID_HEADER: &str = "bu-connection-id";

/// Merge header layers; entries in later layers replace same-named entries in earlier ones.
pub fn merge_headers(layers: &[&HeaderMap]) -> HeaderMap {
    let mut merged = HeaderMap::new();
    for layer in layers {
        for name in layer.keys() {
            merged.remove(name);
            for value in layer.get_all(name) {
                merged.append(name.clone(), value.clone());
            }
        }
    }
    merged
}

/// Convert caller-supplied string headers into a [`HeaderMap`].
pub fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            Error::validation_with_context(
                format!("invalid header name {:?}: {}", name, e),
                ErrorContext::new()
                    .with_field_path("headers")
                    .with_source("headers"),
            )
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            Error::validation_with_context(
                format!("invalid value for header {}: {}", name, e),
                ErrorContext::new()
                    .with_field_path("headers")
                    .with_source("headers"),
            )
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// `Authorization` value for `api_key`, marked sensitive.
pub fn bearer_value(api_key: &str) -> Result<HeaderValue> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
        Error::validation_with_context(
            "api_key contains characters not allowed in a header",
            ErrorContext::new()
                .with_field_path("api_key")
                .with_source("headers"),
        )
    })?;
    auth.set_sensitive(true);
    Ok(auth)
}

/// Library default headers: bearer auth, JSON content type and, when given, the connection id.
pub fn default_headers(api_key: &str, connection_id: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(AUTHORIZATION, bearer_value(api_key)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(id) = connection_id {
        let value = HeaderValue::from_str(id).map_err(|_| {
            Error::validation_with_context(
                "connection_id contains characters not allowed in a header",
                ErrorContext::new()
                    .with_field_path("connection_id")
                    .with_source("headers"),
            )
        })?;
        headers.insert(HeaderName::from_static(CONNECTION_ID_HEADER), value);
    }

    Ok(headers)
}
