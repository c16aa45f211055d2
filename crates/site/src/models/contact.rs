//! Contact inquiry domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staffly_core::ContactInquiryId;

/// A stored contact inquiry.
///
/// Serializes with camelCase field names to match the wire format
/// consumed by the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    /// Unique inquiry ID, assigned by storage.
    pub id: ContactInquiryId,
    pub name: String,
    pub email: String,
    pub company: String,
    /// Which product line the inquiry is about.
    pub interest: String,
    pub message: String,
    /// When the inquiry was submitted. Set once at creation.
    pub created_at: DateTime<Utc>,
}

/// The insertable form of a contact inquiry: everything the caller
/// supplies, without the server-assigned ID and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactInquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub interest: String,
    pub message: String,
}
