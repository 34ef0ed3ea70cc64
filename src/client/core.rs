use super::builder::BundleUpBuilder;
use super::config::{ApiKey, ClientConfig};
use super::resource::{Connections, Integrations, Webhooks, CONNECTIONS, INTEGRATIONS, WEBHOOKS};
use crate::proxy::ProxyClient;
use crate::transport::HttpTransport;
use crate::unify::UnifyClient;
use crate::Result;
use std::fmt;
use tracing::{debug, info};

/// Top-level BundleUp client.
///
/// Owns the API key and the HTTP connection pool shared by every client it hands
/// out. Resource clients are built once; proxy and unify clients are built per
/// connection id.
pub struct BundleUp {
    api_key: ApiKey,
    config: ClientConfig,
    transport: HttpTransport,
    owns_transport: bool,
    connections: Connections,
    integrations: Integrations,
    webhooks: Webhooks,
}

impl BundleUp {
    /// Client with default endpoints and an owned connection pool.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        BundleUpBuilder::new().api_key(api_key).build()
    }

    pub fn builder() -> BundleUpBuilder {
        BundleUpBuilder::new()
    }

    pub(crate) fn from_parts(
        api_key: ApiKey,
        config: ClientConfig,
        transport: HttpTransport,
        owns_transport: bool,
    ) -> Self {
        let connections =
            Connections::new(transport.clone(), api_key.clone(), &config, CONNECTIONS);
        let integrations =
            Integrations::new(transport.clone(), api_key.clone(), &config, INTEGRATIONS);
        let webhooks = Webhooks::new(transport.clone(), api_key.clone(), &config, WEBHOOKS);
        Self {
            api_key,
            config,
            transport,
            owns_transport,
            connections,
            integrations,
            webhooks,
        }
    }

    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    pub fn integrations(&self) -> &Integrations {
        &self.integrations
    }

    pub fn webhooks(&self) -> &Webhooks {
        &self.webhooks
    }

    /// Proxy client for `connection_id`, sharing this client's pool.
    pub fn proxy(&self, connection_id: &str) -> Result<ProxyClient> {
        ProxyClient::new(
            self.transport.clone(),
            self.api_key.clone(),
            connection_id,
            self.config.proxy_base_url.clone(),
        )
    }

    /// Unify client for `connection_id`, sharing this client's pool.
    pub fn unify(&self, connection_id: &str) -> Result<UnifyClient> {
        UnifyClient::new(
            self.transport.clone(),
            self.api_key.clone(),
            connection_id,
            self.config.unify_base_url.clone(),
        )
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The pool shared by every client this facade hands out.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Whether the pool was created by this client rather than supplied by the caller.
    pub fn owns_transport(&self) -> bool {
        self.owns_transport
    }

    /// Tear the client down.
    ///
    /// An owned pool is released once the proxy and unify clients derived from
    /// it are dropped as well. A caller-supplied pool is left untouched.
    pub fn close(self) {
        if self.owns_transport {
            info!("releasing owned HTTP connection pool");
        } else {
            debug!("caller-supplied HTTP client left open");
        }
    }
}

impl fmt::Debug for BundleUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundleUp")
            .field("config", &self.config)
            .field("owns_transport", &self.owns_transport)
            .finish_non_exhaustive()
    }
}
