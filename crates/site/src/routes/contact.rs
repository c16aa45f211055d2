//! Contact form route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::error::{AppError, Envelope, Result};
use crate::models::NewContactInquiry;
use crate::state::AppState;
use crate::validation::{StringFields, Validated};

/// Contact form payload. Every field is required; the `Validated`
/// extractor reports all missing or wrong-typed fields in one 400
/// response.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactPayload {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "email is required"))]
    pub email: Option<String>,
    #[validate(required(message = "company is required"))]
    pub company: Option<String>,
    #[validate(required(message = "interest is required"))]
    pub interest: Option<String>,
    #[validate(required(message = "message is required"))]
    pub message: Option<String>,
}

impl StringFields for ContactPayload {
    const STRING_FIELDS: &'static [&'static str] =
        &["name", "email", "company", "interest", "message"];
}

impl ContactPayload {
    /// Convert into the insertable shape.
    ///
    /// Only valid after `validate()` has passed; all required fields are
    /// then `Some`.
    fn into_insert(self) -> NewContactInquiry {
        NewContactInquiry {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            interest: self.interest.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        }
    }
}

/// Submit a contact inquiry.
///
/// POST /api/contact
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Validated(payload): Validated<ContactPayload>,
) -> Result<impl IntoResponse> {
    let inquiry = state
        .storage()
        .create_contact_inquiry(payload.into_insert())
        .await
        .map_err(|e| AppError::storage("Failed to create contact inquiry", e))?;

    tracing::info!(id = %inquiry.id, email = %inquiry.email, "Contact inquiry created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Contact inquiry created successfully",
            inquiry,
        )),
    ))
}
