//! Unify: one response shape over many third-party APIs.
//!
//! Every endpoint returns a [`UnifyResponse`] envelope with cursor pagination.

mod chat;
mod client;
mod git;
mod pm;
mod types;

pub use chat::Chat;
pub use client::UnifyClient;
pub use git::Git;
pub use pm::Pm;
pub use types::{Metadata, UnifyParams, UnifyResponse};
