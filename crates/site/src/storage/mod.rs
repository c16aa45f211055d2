//! Storage abstraction for lead-capture records.
//!
//! This module provides a [`Storage`] trait that decouples the HTTP
//! handlers from the concrete persistence medium. The reference
//! implementation is [`MemStorage`], an in-memory store; a relational
//! backend would implement the same trait without touching any handler.
//!
//! # Example
//!
//! ```ignore
//! use staffly_site::storage::{MemStorage, Storage};
//! use staffly_site::models::NewContactInquiry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let storage = MemStorage::new();
//!     let inquiry = storage
//!         .create_contact_inquiry(NewContactInquiry { /* ... */ })
//!         .await
//!         .unwrap();
//!     assert_eq!(inquiry.id.as_i32(), 1);
//! }
//! ```

mod memory;

pub use memory::MemStorage;

use async_trait::async_trait;
use thiserror::Error;

use staffly_core::{ContactInquiryId, DemoRequestId, UserId};

use crate::models::{
    ContactInquiry, DemoRequest, NewContactInquiry, NewDemoRequest, NewUser, User,
};

/// Errors surfaced by storage backends.
///
/// Handlers treat any variant other than [`StorageError::Conflict`] as an
/// unexpected server fault: the cause is logged and never leaked to clients.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Constraint violation (e.g., duplicate username).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Backend-specific failure (I/O, connection loss, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// The create/read contract for lead-capture records.
///
/// Implementations must be thread-safe (`Send + Sync`) and have a static
/// lifetime so they can be shared behind `Arc<dyn Storage>` in application
/// state. All methods are async to admit backends that perform I/O; the
/// in-memory reference implementation completes without suspension.
///
/// # ID assignment
///
/// Every `create_*` method assigns a fresh ID that is unique within its
/// entity's collection and monotonically increasing per storage instance,
/// starting at 1. Each entity kind has its own counter. Timestamped
/// entities get `created_at` assigned at creation and never mutated.
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// Store a new user, assigning a fresh ID.
    ///
    /// Returns `StorageError::Conflict` if the username is already taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError>;

    /// Get a user by ID. Returns `Ok(None)` if absent.
    async fn user(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Get a user by username. Returns `Ok(None)` if absent.
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// Store a new contact inquiry, assigning a fresh ID and `created_at`.
    async fn create_contact_inquiry(
        &self,
        new_inquiry: NewContactInquiry,
    ) -> Result<ContactInquiry, StorageError>;

    /// Get a contact inquiry by ID. Returns `Ok(None)` if absent.
    async fn contact_inquiry(
        &self,
        id: ContactInquiryId,
    ) -> Result<Option<ContactInquiry>, StorageError>;

    /// Store a new demo request, assigning a fresh ID and `created_at`.
    async fn create_demo_request(
        &self,
        new_request: NewDemoRequest,
    ) -> Result<DemoRequest, StorageError>;

    /// Get a demo request by ID. Returns `Ok(None)` if absent.
    async fn demo_request(&self, id: DemoRequestId) -> Result<Option<DemoRequest>, StorageError>;
}
