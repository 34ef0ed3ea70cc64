//! Proxy client: raw requests forwarded to a connected third-party API.
//!
//! Responses are returned as parsed JSON without any reshaping. An empty body
//! (typical for `DELETE` or `204 No Content`) comes back as `Value::Null`.

use crate::client::config::ApiKey;
use crate::client::endpoint::build_proxy_url;
use crate::client::validation::validate_non_empty_string;
use crate::transport::{ApiRequest, HttpTransport};
use crate::utils::{default_headers, merge_headers, to_header_map};
use crate::Result;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Client for one connection's proxy endpoint.
#[derive(Clone)]
pub struct ProxyClient {
    transport: HttpTransport,
    api_key: ApiKey,
    connection_id: Arc<str>,
    base_url: String,
}

impl ProxyClient {
    pub fn new(
        transport: HttpTransport,
        api_key: ApiKey,
        connection_id: &str,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        validate_non_empty_string(connection_id, "connection_id")?;
        Ok(Self {
            transport,
            api_key,
            connection_id: Arc::from(connection_id),
            base_url: base_url.into(),
        })
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    pub fn build_url(&self, path: &str) -> String {
        build_proxy_url(&self.base_url, path)
    }

    /// Library defaults overlaid with `extra`; `extra` wins on collision.
    pub fn headers(&self, extra: Option<&HashMap<String, String>>) -> Result<HeaderMap> {
        let defaults = default_headers(self.api_key.expose(), Some(self.connection_id.as_ref()))?;
        match extra {
            Some(extra) => {
                let extra = to_header_map(extra)?;
                Ok(merge_headers(&[&defaults, &extra]))
            }
            None => Ok(defaults),
        }
    }

    pub fn get(&self, path: &str, headers: Option<&HashMap<String, String>>) -> Result<Value> {
        self.request(Method::GET, path, None, headers)
    }

    pub fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        self.request(Method::POST, path, body, headers)
    }

    pub fn put(
        &self,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        self.request(Method::PUT, path, body, headers)
    }

    pub fn patch(
        &self,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        self.request(Method::PATCH, path, body, headers)
    }

    pub fn delete(&self, path: &str, headers: Option<&HashMap<String, String>>) -> Result<Value> {
        self.request(Method::DELETE, path, None, headers)
    }

    /// Forward an arbitrary verb. The verb-named methods all delegate here.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        validate_non_empty_string(path, "path")?;
        let operation = format!("Proxy {} {} failed", method, path);
        let request = ApiRequest::new(method, self.build_url(path), operation)
            .with_headers(self.headers(headers)?)
            .with_body(body);
        self.transport.execute(request)
    }
}

impl fmt::Debug for ProxyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyClient")
            .field("connection_id", &self.connection_id)
            .finish_non_exhaustive()
    }
}
