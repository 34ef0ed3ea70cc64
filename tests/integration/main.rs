//! Integration tests for the BundleUp client against a mock HTTP server.

mod mock_server;
mod proxy;
mod resources;
