//! User domain types.
//!
//! Users exist only at the storage layer for now; there is no public
//! HTTP surface for account management.

use serde::{Deserialize, Serialize};

use staffly_core::UserId;

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned by storage.
    pub id: UserId,
    /// Login name. Unique across all users.
    pub username: String,
    pub password: String,
}

/// The insertable form of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
