//! # bundleup
//!
//! Rust SDK for the BundleUp API.
//!
//! ## Overview
//!
//! BundleUp exposes three styles of access, all reachable from one [`BundleUp`]
//! client:
//!
//! - **Resources**: CRUD over connections, integrations and webhooks.
//! - **Proxy**: raw requests forwarded to a connected third-party API.
//! - **Unify**: normalized chat, git and project-management data behind one
//!   paginated envelope.
//!
//! Every call is a single blocking HTTP request. Failures surface as
//! [`Error`] with the HTTP status and response body attached when available;
//! nothing is retried or cached.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bundleup::{BundleUp, UnifyParams};
//!
//! fn main() -> bundleup::Result<()> {
//!     let client = BundleUp::new("your-api-key")?;
//!
//!     for conn in client.connections().list()? {
//!         println!("{:?} {:?}", conn.id, conn.name);
//!     }
//!
//!     let user = client.proxy("connection-id")?.get("/user", None)?;
//!     println!("{}", user);
//!
//!     let unify = client.unify("connection-id")?;
//!     let repos = unify.git().repos(Some(&UnifyParams::new().with_limit(50)))?;
//!     println!("{} repos, more: {}", repos.data.len(), repos.has_more());
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Top-level client, builder, configuration and resource clients |
//! | [`proxy`] | Per-connection proxy client |
//! | [`unify`] | Unify client, domain groups and the response envelope |
//! | [`types`] | Resource record types |
//! | [`transport`] | Shared blocking HTTP transport |
//! | [`error`] | Error taxonomy |
//! | [`utils`] | Header helpers |

pub mod client;
pub mod error;
pub mod proxy;
pub mod transport;
pub mod types;
pub mod unify;
pub mod utils;

// Re-export main types for convenience
pub use client::{
    ApiKey, BundleUp, BundleUpBuilder, ClientConfig, Connections, Integrations, ResourceClient,
    Webhooks,
};
pub use error::{ApiFailure, Error, ErrorContext, ErrorKind};
pub use proxy::ProxyClient;
pub use types::{Connection, Integration, Webhook};
pub use unify::{Metadata, UnifyClient, UnifyParams, UnifyResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
