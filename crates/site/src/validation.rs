//! Request payload validation.
//!
//! Wraps `validator::Validate` in an axum extractor that checks every
//! field and reports every violation at once, instead of failing on the
//! first. The aggregated message names each offending field so form
//! clients can surface it directly.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::error::{AppError, Envelope};

/// A single field-level violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: String,
    /// Human-readable description, e.g. `"email is required"`.
    pub message: String,
}

/// All violations found in one payload, aggregated into one message.
#[derive(Debug, Clone, Error)]
#[error("Validation error: {}", combined_message(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// Join the per-field messages, already ordered by field name so the
/// output is stable regardless of map iteration order.
fn combined_message(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<&validator::ValidationErrors> for ValidationError {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut field_errors = Vec::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations {
                field_errors.push(FieldError {
                    field: field.to_string(),
                    message: violation
                        .message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string),
                });
            }
        }
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        Self {
            errors: field_errors,
        }
    }
}

/// Wire-level shape of a JSON form payload: the fields that must carry
/// strings when present.
///
/// `validator::Validate` only sees the payload after deserialization, and
/// serde stops at the first wrong-typed field. Declaring the string
/// fields here lets [`Validated`] check types on the raw JSON value
/// first, so a body with several wrong-typed fields names all of them.
pub trait StringFields {
    /// Wire names (after any serde rename) of the string-typed fields.
    const STRING_FIELDS: &'static [&'static str];
}

/// An axum extractor that deserializes a JSON body and validates it using
/// `validator::Validate`.
///
/// Drop-in replacement for `Json<T>`: on failure the request is rejected
/// with a 400 `{success, message}` envelope. Malformed JSON uses the
/// deserializer's message; field-level problems (wrong-typed fields via
/// [`StringFields`], missing fields via `#[validate(required)]`) are
/// collected into one aggregated [`ValidationError`] message.
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + Validate + StringFields + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(mut value) = axum::Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                (
                    StatusCode::BAD_REQUEST,
                    axum::Json(Envelope::failure(rejection.body_text())),
                )
                    .into_response()
            })?;

        let mut errors = Vec::new();
        if let Some(map) = value.as_object_mut() {
            for &field in T::STRING_FIELDS {
                let wrong_type = map
                    .get(field)
                    .is_some_and(|v| !v.is_string() && !v.is_null());
                if wrong_type {
                    errors.push(FieldError {
                        field: field.to_owned(),
                        message: format!("{field} must be a string"),
                    });
                    // Blank the field out so deserialization succeeds and
                    // the required check does not report it a second time.
                    map.insert(field.to_owned(), Value::String(String::new()));
                }
            }
        }

        let payload: T = serde_json::from_value(value).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                axum::Json(Envelope::failure(e.to_string())),
            )
                .into_response()
        })?;

        if let Err(violations) = payload.validate() {
            errors.extend(ValidationError::from(&violations).errors);
        }

        if !errors.is_empty() {
            errors.sort_by(|a, b| a.field.cmp(&b.field));
            return Err(AppError::Validation(ValidationError { errors }).into_response());
        }

        Ok(Self(payload))
    }
}
