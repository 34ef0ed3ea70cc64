//! Blocking HTTP transport shared by every client.

mod http;

pub(crate) use http::ApiRequest;
pub use http::HttpTransport;
