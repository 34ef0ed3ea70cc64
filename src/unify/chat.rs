//! Chat endpoints.

use super::client::UnifyClient;
use super::types::{UnifyParams, UnifyResponse};
use crate::Result;

/// Normalized chat data (Slack, Discord, Teams, ...).
#[derive(Debug, Clone, Copy)]
pub struct Chat<'a> {
    client: &'a UnifyClient,
}

impl<'a> Chat<'a> {
    pub(crate) fn new(client: &'a UnifyClient) -> Self {
        Self { client }
    }

    /// `GET /chat/channels`
    pub fn channels(&self, params: Option<&UnifyParams>) -> Result<UnifyResponse> {
        self.client.fetch("/chat/channels", params)
    }
}
