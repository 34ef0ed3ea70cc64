use crate::client::error_classification::classify_status;
use crate::{ApiFailure, Error, Result};
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

const POOL_MAX_IDLE_PER_HOST: usize = 32;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Shared blocking connection pool.
///
/// Cloning is cheap and every clone talks through the same pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a pool with the library defaults. `timeout` of `None` keeps reqwest's default.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap a caller-configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Execute a request and return the parsed body, or `Value::Null` for an empty body.
    pub(crate) fn execute(&self, request: ApiRequest<'_>) -> Result<Value> {
        let (status, text) = self.send(&request)?;
        if text.trim().is_empty() {
            debug!(status = status.as_u16(), "{}: empty response body", request.operation);
            return Ok(Value::Null);
        }
        parse_body(&request.operation, status, text)
    }

    /// Execute a request and return the raw body text without decoding it.
    pub(crate) fn execute_raw(&self, request: ApiRequest<'_>) -> Result<String> {
        let (_, text) = self.send(&request)?;
        Ok(text)
    }

    /// Execute a request and decode the body into `T`. An empty body is an error.
    pub(crate) fn execute_as<T: DeserializeOwned>(&self, request: ApiRequest<'_>) -> Result<T> {
        let (status, text) = self.send(&request)?;
        if text.trim().is_empty() {
            return Err(Error::Api(
                ApiFailure::new(format!("{}: response body is empty", request.operation))
                    .with_status(status.as_u16()),
            ));
        }
        match serde_json::from_str::<T>(&text) {
            Ok(decoded) => Ok(decoded),
            Err(e) => Err(Error::Api(
                ApiFailure::new(format!(
                    "{}: unexpected response shape: {}",
                    request.operation, e
                ))
                .with_status(status.as_u16())
                .with_body(text),
            )),
        }
    }

    /// Send the request; non-2xx statuses and transport failures are classified here.
    fn send(&self, request: &ApiRequest<'_>) -> Result<(StatusCode, String)> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            warn!(url = %request.url, error = %e, "{}: no response", request.operation);
            Error::from_api_failure(
                classify_status(None),
                ApiFailure::new(format!("{}: {}", request.operation, e)),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort capture; a body that cannot be read is dropped.
            let body = response.text().ok().filter(|b| !b.is_empty());
            let kind = classify_status(Some(status.as_u16()));
            warn!(kind = ?kind, status = status.as_u16(), "{}", request.operation);

            let mut failure = ApiFailure::new(request.operation.clone()).with_status(status.as_u16());
            if let Some(body) = body {
                failure = failure.with_body(body);
            }
            return Err(Error::from_api_failure(kind, failure));
        }

        let text = response.text().map_err(|e| {
            Error::Api(
                ApiFailure::new(format!(
                    "{}: failed to read response body: {}",
                    request.operation, e
                ))
                .with_status(status.as_u16()),
            )
        })?;
        debug!(status = status.as_u16(), bytes = text.len(), "response received");
        Ok((status, text))
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

fn parse_body(operation: &str, status: StatusCode, text: String) -> Result<Value> {
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Ok(value),
        Err(e) => Err(Error::Api(
            ApiFailure::new(format!("{}: response is not valid JSON: {}", operation, e))
                .with_status(status.as_u16())
                .with_body(text),
        )),
    }
}

/// One outbound call: everything the transport needs plus the operation label used in errors.
pub(crate) struct ApiRequest<'a> {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<&'a Value>,
    pub operation: String,
}

impl<'a> ApiRequest<'a> {
    pub fn new(method: Method, url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            operation: operation.into(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Option<&'a Value>) -> Self {
        self.body = body;
        self
    }
}
