//! Demo request route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::error::{AppError, Envelope, Result};
use crate::models::NewDemoRequest;
use crate::state::AppState;
use crate::validation::{StringFields, Validated};

/// Demo request payload. `phone` and `message` are optional.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequestPayload {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "email is required"))]
    pub email: Option<String>,
    #[validate(required(message = "company is required"))]
    pub company: Option<String>,
    pub phone: Option<String>,
    #[validate(required(message = "productInterest is required"))]
    pub product_interest: Option<String>,
    pub message: Option<String>,
}

impl StringFields for DemoRequestPayload {
    const STRING_FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "company",
        "phone",
        "productInterest",
        "message",
    ];
}

impl DemoRequestPayload {
    /// Convert into the insertable shape. Only valid after `validate()`.
    fn into_insert(self) -> NewDemoRequest {
        NewDemoRequest {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            phone: self.phone,
            product_interest: self.product_interest.unwrap_or_default(),
            message: self.message,
        }
    }
}

/// Request a product demo.
///
/// POST /api/request-demo
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Validated(payload): Validated<DemoRequestPayload>,
) -> Result<impl IntoResponse> {
    let request = state
        .storage()
        .create_demo_request(payload.into_insert())
        .await
        .map_err(|e| AppError::storage("Failed to create demo request", e))?;

    tracing::info!(id = %request.id, email = %request.email, "Demo request created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Demo request created successfully",
            request,
        )),
    ))
}
