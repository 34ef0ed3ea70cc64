//! Unify client: normalized read endpoints scoped to one connection.

use super::chat::Chat;
use super::git::Git;
use super::pm::Pm;
use super::types::{UnifyParams, UnifyResponse};
use crate::client::config::ApiKey;
use crate::client::endpoint::{build_proxy_url, normalize_path};
use crate::client::validation::validate_non_empty_string;
use crate::transport::{ApiRequest, HttpTransport};
use crate::utils::default_headers;
use crate::Result;
use reqwest::Method;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Entry point for unify endpoints. Domain groups are reached through
/// [`chat`](Self::chat), [`git`](Self::git) and [`pm`](Self::pm).
#[derive(Clone)]
pub struct UnifyClient {
    transport: HttpTransport,
    api_key: ApiKey,
    connection_id: Arc<str>,
    base_url: String,
}

impl UnifyClient {
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

    pub fn chat(&self) -> Chat<'_> {
        Chat::new(self)
    }

    pub fn git(&self) -> Git<'_> {
        Git::new(self)
    }

    pub fn pm(&self) -> Pm<'_> {
        Pm::new(self)
    }

    pub fn build_url(&self, path: &str) -> String {
        build_proxy_url(&self.base_url, path)
    }

    /// Shared GET path for every domain group.
    pub(crate) fn fetch(&self, path: &str, params: Option<&UnifyParams>) -> Result<UnifyResponse> {
        let path = normalize_path(path);
        let headers = default_headers(self.api_key.expose(), Some(self.connection_id.as_ref()))?;
        let query = params.map(UnifyParams::to_query_pairs).unwrap_or_default();

        let request = ApiRequest::new(
            Method::GET,
            self.build_url(&path),
            format!("Unify API request to {} failed", path),
        )
        .with_headers(headers)
        .with_query(query);

        let response: UnifyResponse = self.transport.execute_as(request)?;
        debug!(
            path = %path,
            records = response.data.len(),
            has_more = response.metadata.has_more,
            "unify response decoded"
        );
        Ok(response)
    }
}

impl fmt::Debug for UnifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnifyClient")
            .field("connection_id", &self.connection_id)
            .finish_non_exhaustive()
    }
}
