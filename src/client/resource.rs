//! Generic CRUD client over one namespaced collection of the resource API.

use super::config::{ApiKey, ClientConfig};
use super::endpoint::build_resource_url;
use super::validation::{validate_non_empty_string, validate_object};
use crate::transport::{ApiRequest, HttpTransport};
use crate::types::{Connection, Integration, Webhook};
use crate::utils::default_headers;
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

pub const CONNECTIONS: &str = "connections";
pub const INTEGRATIONS: &str = "integrations";
pub const WEBHOOKS: &str = "webhooks";

/// CRUD over `{base_url}/{version}/{namespace}`.
///
/// `T` is the record type responses decode into. Use `serde_json::Value` for
/// the untyped upstream JSON.
pub struct ResourceClient<T> {
    transport: HttpTransport,
    api_key: ApiKey,
    base_url: String,
    version: String,
    namespace: String,
    _record: PhantomData<fn() -> T>,
}

pub type Connections = ResourceClient<Connection>;
pub type Integrations = ResourceClient<Integration>;
pub type Webhooks = ResourceClient<Webhook>;

impl<T> ResourceClient<T> {
    pub fn new(
        transport: HttpTransport,
        api_key: ApiKey,
        config: &ClientConfig,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_key,
            base_url: config.api_base_url.clone(),
            version: config.api_version.clone(),
            namespace: namespace.into(),
            _record: PhantomData,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Collection URL, or the single-entity URL when `id` is given.
    pub fn build_url(&self, id: Option<&str>) -> String {
        build_resource_url(&self.base_url, &self.version, &self.namespace, id)
    }

    fn request<'a>(
        &self,
        method: Method,
        id: Option<&str>,
        operation: String,
    ) -> Result<ApiRequest<'a>> {
        let headers = default_headers(self.api_key.expose(), None)?;
        Ok(ApiRequest::new(method, self.build_url(id), operation).with_headers(headers))
    }
}

impl<T: DeserializeOwned> ResourceClient<T> {
    /// List every record in the collection.
    pub fn list(&self) -> Result<Vec<T>> {
        self.list_with_params(&[])
    }

    /// List with query parameters passed through verbatim.
    pub fn list_with_params(&self, params: &[(&str, &str)]) -> Result<Vec<T>> {
        let query = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let request = self
            .request(Method::GET, None, format!("Failed to list {}", self.namespace))?
            .with_query(query);
        self.transport.execute_as(request)
    }

    /// Create a record. `data` must serialize to a JSON object.
    pub fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<T> {
        let body = to_object(data)?;
        let request = self
            .request(Method::POST, None, format!("Failed to create {}", self.namespace))?
            .with_body(Some(&body));
        self.transport.execute_as(request)
    }

    /// Fetch one record by id.
    pub fn retrieve(&self, id: &str) -> Result<T> {
        validate_non_empty_string(id, "id")?;
        let request = self.request(
            Method::GET,
            Some(id),
            format!("Failed to retrieve {} {}", self.namespace, id),
        )?;
        self.transport.execute_as(request)
    }

    /// Partial update: fields absent from `data` are left untouched on the server.
    pub fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<T> {
        validate_non_empty_string(id, "id")?;
        let body = to_object(data)?;
        let request = self
            .request(
                Method::PATCH,
                Some(id),
                format!("Failed to update {} {}", self.namespace, id),
            )?
            .with_body(Some(&body));
        self.transport.execute_as(request)
    }

    /// Delete a record. Any 2xx is success; a response body is discarded.
    pub fn delete(&self, id: &str) -> Result<()> {
        validate_non_empty_string(id, "id")?;
        let request = self.request(
            Method::DELETE,
            Some(id),
            format!("Failed to delete {} {}", self.namespace, id),
        )?;
        let body = self.transport.execute_raw(request)?;
        if !body.trim().is_empty() {
            debug!(
                namespace = %self.namespace,
                id,
                bytes = body.len(),
                "discarding delete response body"
            );
        }
        Ok(())
    }
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            version: self.version.clone(),
            namespace: self.namespace.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("namespace", &self.namespace)
            .field("url", &self.build_url(None))
            .finish_non_exhaustive()
    }
}

fn to_object<B: Serialize + ?Sized>(data: &B) -> Result<Value> {
    let value = serde_json::to_value(data).map_err(|e| {
        Error::validation_with_context(
            format!("data could not be serialized: {}", e),
            ErrorContext::new()
                .with_field_path("data")
                .with_source("validation"),
        )
    })?;
    validate_object(&value, "data")?;
    Ok(value)
}
