//! Top-level client, resource clients and the shared request plumbing.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod config;
pub mod core;
pub mod endpoint;
pub mod error_classification;
pub mod resource;
pub mod validation;

pub use builder::BundleUpBuilder;
pub use config::{ApiKey, ClientConfig};
pub use core::BundleUp;
pub use error_classification::classify_status;
pub use resource::{Connections, Integrations, ResourceClient, Webhooks};
