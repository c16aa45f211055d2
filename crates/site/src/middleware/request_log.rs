//! API request logging middleware.
//!
//! Emits one log line per `/api/*` request with method, path, status,
//! duration, and a truncated preview of the JSON response body. Requests
//! outside `/api` (static assets, health checks) pass through untouched.

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::Response,
};

/// Maximum length of an emitted log line, including the ellipsis.
const MAX_LINE_LENGTH: usize = 80;

/// Middleware that logs every `/api/*` request.
///
/// The response body is buffered to capture the preview, then re-attached
/// unchanged. API responses are small JSON documents, so buffering is
/// bounded in practice.
pub async fn api_log_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !path.starts_with("/api") {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    let (parts, body) = response.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let mut line = format!("{method} {path} {status} in {elapsed_ms}ms");
            if let Ok(preview) = std::str::from_utf8(&bytes)
                && !preview.is_empty()
            {
                line.push_str(" :: ");
                line.push_str(preview);
            }
            tracing::info!(target: "staffly_site::api", "{}", truncate_line(&line));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to buffer API response body");
            tracing::info!(
                target: "staffly_site::api",
                "{method} {path} {status} in {elapsed_ms}ms"
            );
            Response::from_parts(parts, Body::empty())
        }
    }
}

/// Truncate a log line to [`MAX_LINE_LENGTH`] characters, ending with an
/// ellipsis when cut. Respects char boundaries.
fn truncate_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_LENGTH {
        return line.to_owned();
    }

    let mut truncated: String = line.chars().take(MAX_LINE_LENGTH - 1).collect();
    truncated.push('\u{2026}');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(truncate_line("GET /api/products 200 in 1ms"), "GET /api/products 200 in 1ms");
    }

    #[test]
    fn long_lines_end_with_ellipsis_at_the_limit() {
        let line = format!("POST /api/contact 201 in 2ms :: {}", "x".repeat(100));
        let truncated = truncate_line(&line);
        assert_eq!(truncated.chars().count(), MAX_LINE_LENGTH);
        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let line = format!("POST /api/contact 201 in 2ms :: {}", "ü".repeat(100));
        let truncated = truncate_line(&line);
        assert_eq!(truncated.chars().count(), MAX_LINE_LENGTH);
    }
}
