//! Staffly Site library.
//!
//! This crate provides the marketing site backend as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod validation;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router for the given state.
///
/// Used by both the binary and the integration tests so they serve
/// an identical surface.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(middleware::api_log_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
