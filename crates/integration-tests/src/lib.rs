//! Shared helpers for Staffly integration tests.
//!
//! Each test spawns the full site in-process on an ephemeral port and
//! talks to it over HTTP with `reqwest`, so the tests exercise exactly
//! the surface a browser client sees. Every spawn gets a fresh in-memory
//! store, so tests are isolated from each other.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use staffly_site::config::SiteConfig;
use staffly_site::state::AppState;

/// Spawn the site on an ephemeral loopback port.
///
/// Returns the base URL (e.g., `http://127.0.0.1:49312`). The server task
/// runs until the test's tokio runtime shuts down.
pub async fn spawn_site() -> String {
    let config = SiteConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        static_dir: PathBuf::from("dist/public"),
    };
    let state = AppState::in_memory(config);
    let app = staffly_site::app(state);

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{addr}")
}
