//! Unified error handling for the site.
//!
//! Provides the `AppError` type that maps every failure class to an HTTP
//! status and a JSON body, plus the [`Envelope`] wrapper used by all
//! mutation endpoints. Route handlers return `Result<T, AppError>`; any
//! error that reaches the router boundary is converted here, so nothing
//! internal ever leaks to a client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::storage::StorageError;
use crate::validation::ValidationError;

/// The `{success, message, data?}` JSON wrapper returned by all mutation
/// endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T = ()> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success envelope carrying the stored record.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Failure envelope with no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or incomplete client input. Not a server fault.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage layer failed unexpectedly. `context` is the message the
    /// client sees in the 500 envelope; the cause only goes to the log.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        source: StorageError,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Wrap a storage failure with the endpoint's client-facing message.
    pub fn storage(context: &'static str, source: StorageError) -> Self {
        Self::Storage { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(Envelope::failure(err.to_string())),
            )
                .into_response(),
            Self::Storage { context, source } => {
                // Log the cause; the client sees only the envelope message.
                tracing::error!(error = %source, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Envelope::failure(context)),
                )
                    .into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
