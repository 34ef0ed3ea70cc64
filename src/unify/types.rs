//! Unify envelope and query parameters.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Pagination metadata of a unify response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, alias = "hasMore")]
    pub has_more: bool,
    /// Opaque cursor; only meaningful when `has_more` is true.
    #[serde(default, alias = "nextCursor", skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Envelope returned by every unify endpoint.
///
/// `data` holds the normalized records exactly as the service sent them.
/// `raw` holds the upstream originals and is only populated when requested
/// with [`UnifyParams::with_include_raw`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifyResponse {
    pub data: Vec<Value>,
    #[serde(
        rename = "_raw",
        alias = "raw",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub raw: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

fn null_as_default<'de, D>(deserializer: D) -> std::result::Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metadata>::deserialize(deserializer)?.unwrap_or_default())
}

impl UnifyResponse {
    pub fn has_more(&self) -> bool {
        self.metadata.has_more
    }

    /// The cursor for the next page, ignored unless `has_more` is set.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.metadata.has_more {
            self.metadata.next_cursor.as_deref()
        } else {
            None
        }
    }

    /// Params for the following page: `current` with `after` set to the next cursor.
    pub fn next_page_params(&self, current: &UnifyParams) -> Option<UnifyParams> {
        self.next_cursor()
            .map(|cursor| current.clone().with_after(cursor))
    }
}

/// Query parameters accepted by unify endpoints. Passed through without range checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifyParams {
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub include_raw: Option<bool>,
}

impl UnifyParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn with_include_raw(mut self, include_raw: bool) -> Self {
        self.include_raw = Some(include_raw);
        self
    }

    /// Query pairs in wire form. Unset fields produce no key; booleans are lowercase.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(after) = &self.after {
            pairs.push(("after".to_string(), after.clone()));
        }
        if let Some(include_raw) = self.include_raw {
            let flag = if include_raw { "true" } else { "false" };
            pairs.push(("include_raw".to_string(), flag.to_string()));
        }
        pairs
    }
}
