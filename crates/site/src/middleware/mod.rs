//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. API request log (one line per `/api/*` request)

pub mod request_log;

pub use request_log::api_log_middleware;
