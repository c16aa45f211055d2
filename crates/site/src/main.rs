//! Staffly Site - Public marketing site backend.
//!
//! This binary serves the marketing site on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API under `/api`
//! - Fixed in-binary product catalog
//! - Pluggable storage behind the `Storage` trait; the binary runs the
//!   in-memory reference adapter (nothing persists across restarts)
//! - Static file serving for the built browser client when present

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffly_site::config::SiteConfig;
use staffly_site::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present; real deployments set variables directly.
    dotenvy::dotenv().ok();

    let config = SiteConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "staffly_site=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state with the in-memory storage adapter.
    let state = AppState::in_memory(config.clone());

    let mut app = staffly_site::app(state);

    // Serve the built browser client as the fallback, with index.html
    // for client-side routes. Skipped when the build output is absent
    // (API-only development).
    if config.static_dir.is_dir() {
        let index = config.static_dir.join("index.html");
        app = app.fallback_service(
            ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index)),
        );
        tracing::info!(dir = %config.static_dir.display(), "Serving static assets");
    } else {
        tracing::warn!(
            dir = %config.static_dir.display(),
            "Static asset directory not found; serving API only"
        );
    }

    let addr = config.socket_addr();
    tracing::info!("serving on port {} at {}", config.port, config.host);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
