//! Demo request domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staffly_core::DemoRequestId;

/// A stored demo request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    /// Unique request ID, assigned by storage.
    pub id: DemoRequestId,
    pub name: String,
    pub email: String,
    pub company: String,
    /// Optional callback number.
    pub phone: Option<String>,
    /// Which product the demo is for.
    pub product_interest: String,
    pub message: Option<String>,
    /// When the request was submitted. Set once at creation.
    pub created_at: DateTime<Utc>,
}

/// The insertable form of a demo request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDemoRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
    pub product_interest: String,
    pub message: Option<String>,
}
