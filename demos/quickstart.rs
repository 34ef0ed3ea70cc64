//! Quickstart: resources, proxy and unify from one client
//!
//! API key and connection id are read from environment variables:
//! - BUNDLEUP_API_KEY
//! - BUNDLEUP_CONNECTION_ID (optional; proxy and unify are skipped without it)
//!
//! Usage:
//!   BUNDLEUP_API_KEY=your_key RUST_LOG=bundleup=debug cargo run --example quickstart

use bundleup::{BundleUp, UnifyParams};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("BUNDLEUP_API_KEY")
        .map_err(|_| "BUNDLEUP_API_KEY must be set to run this example")?;

    let client = BundleUp::builder()
        .api_key(api_key)
        .timeout(Duration::from_secs(30))
        .build()?;

    let connections = client.connections().list()?;
    println!("{} connection(s)", connections.len());
    for conn in &connections {
        println!(
            "  {} {} [{}]",
            conn.id.as_deref().unwrap_or("-"),
            conn.name.as_deref().unwrap_or("-"),
            conn.status.as_deref().unwrap_or("unknown"),
        );
    }

    let Ok(connection_id) = std::env::var("BUNDLEUP_CONNECTION_ID") else {
        client.close();
        return Ok(());
    };

    // Raw upstream call through the proxy
    let proxy = client.proxy(&connection_id)?;
    match proxy.get("/user", None) {
        Ok(user) => println!("\nProxy /user:\n{}", serde_json::to_string_pretty(&user)?),
        Err(e) => eprintln!("\nProxy call failed: {e}"),
    }

    // Walk every page of normalized repositories
    let unify = client.unify(&connection_id)?;
    let mut params = UnifyParams::new().with_limit(50);
    let mut total = 0;
    loop {
        let page = unify.git().repos(Some(&params))?;
        total += page.data.len();
        match page.next_page_params(&params) {
            Some(next) => params = next,
            None => break,
        }
    }
    println!("\n{total} repositories via unify");

    client.close();
    Ok(())
}
