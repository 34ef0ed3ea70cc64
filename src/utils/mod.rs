//! Small shared helpers.

pub mod headers;

pub use headers::{
    bearer_value, default_headers, merge_headers, to_header_map, CONNECTION_ID_HEADER,
};
