//! Project-management endpoints.

use super::client::UnifyClient;
use super::types::{UnifyParams, UnifyResponse};
use crate::Result;

#[derive(Debug, Clone, Copy)]
pub struct Pm<'a> {
    client: &'a UnifyClient,
}

impl<'a> Pm<'a> {
    pub(crate) fn new(client: &'a UnifyClient) -> Self {
        Self { client }
    }

    /// `GET /pm/issues`
    pub fn issues(&self, params: Option<&UnifyParams>) -> Result<UnifyResponse> {
        self.client.fetch("/pm/issues", params)
    }
}
