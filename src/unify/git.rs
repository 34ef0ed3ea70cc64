//! Git hosting endpoints.

use super::client::UnifyClient;
use super::types::{UnifyParams, UnifyResponse};
use crate::Result;

/// Normalized git hosting data (GitHub, GitLab, Bitbucket, ...).
#[derive(Debug, Clone, Copy)]
pub struct Git<'a> {
    client: &'a UnifyClient,
}

impl<'a> Git<'a> {
    pub(crate) fn new(client: &'a UnifyClient) -> Self {
        Self { client }
    }

    /// `GET /git/repos`
    pub fn repos(&self, params: Option<&UnifyParams>) -> Result<UnifyResponse> {
        self.client.fetch("/git/repos", params)
    }

    /// `GET /git/pulls`
    pub fn pulls(&self, params: Option<&UnifyParams>) -> Result<UnifyResponse> {
        self.client.fetch("/git/pulls", params)
    }

    /// `GET /git/tags`
    pub fn tags(&self, params: Option<&UnifyParams>) -> Result<UnifyResponse> {
        self.client.fetch("/git/tags", params)
    }

    /// `GET /git/releases`
    pub fn releases(&self, params: Option<&UnifyParams>) -> Result<UnifyResponse> {
        self.client.fetch("/git/releases", params)
    }
}
