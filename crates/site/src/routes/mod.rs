//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Lead capture (JSON envelopes)
//! POST /api/contact            - Submit a contact inquiry
//! POST /api/request-demo       - Request a product demo
//!
//! # Catalog (static data)
//! GET  /api/products           - Product listing
//! GET  /api/products/:id       - Product detail
//! ```

pub mod contact;
pub mod demo;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::create))
        .route("/request-demo", post(demo::create))
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
