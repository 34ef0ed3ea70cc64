//! # Types Module
//!
//! Records exchanged with the resource API.
//!
//! | Type | Namespace | Description |
//! |------|-----------|-------------|
//! | [`Connection`] | `connections` | Authorized link to a third-party integration |
//! | [`Integration`] | `integrations` | A third-party service that can be connected |
//! | [`Webhook`] | `webhooks` | Event callback registration |
//!
//! Records are open-ended. Unknown fields land in each record's `extra` map so
//! upstream schema growth never breaks decoding.
//!
//! ## Example
//!
//! ```rust
//! use bundleup::types::Connection;
//!
//! let conn: Connection = serde_json::from_value(serde_json::json!({
//!     "id": "conn_123",
//!     "name": "GitHub",
//!     "region": "eu"
//! }))
//! .unwrap();
//! assert_eq!(conn.id.as_deref(), Some("conn_123"));
//! assert_eq!(conn.extra["region"], "eu");
//! ```

pub mod resource;

pub use resource::{Connection, Integration, Webhook};
