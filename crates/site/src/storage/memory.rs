//! In-memory storage implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use staffly_core::{ContactInquiryId, DemoRequestId, UserId};

use super::{Storage, StorageError};
use crate::models::{
    ContactInquiry, DemoRequest, NewContactInquiry, NewDemoRequest, NewUser, User,
};

/// A keyed collection with its own monotonically increasing ID counter.
#[derive(Debug)]
struct Table<T> {
    rows: HashMap<i32, T>,
    next_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }

    /// Take the next ID for this table. IDs start at 1.
    fn take_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Debug)]
struct Tables {
    users: Table<User>,
    contact_inquiries: Table<ContactInquiry>,
    demo_requests: Table<DemoRequest>,
}

/// In-memory [`Storage`] implementation.
///
/// Holds one keyed mapping and one ID counter per entity kind behind a
/// single `RwLock`. Nothing persists across process restarts, which is
/// acceptable for the marketing site; a relational backend would implement
/// the same trait with real durability and a unique index on `username`.
#[derive(Debug)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    /// Create an empty store. All ID counters start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                users: Table::new(),
                contact_inquiries: Table::new(),
                demo_requests: Table::new(),
            }),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError> {
        let mut tables = self.tables.write().await;

        // Uniqueness is enforced here, at the storage boundary, so every
        // backend gives callers the same guarantee.
        if tables
            .users
            .rows
            .values()
            .any(|u| u.username == new_user.username)
        {
            return Err(StorageError::Conflict(format!(
                "username '{}' already exists",
                new_user.username
            )));
        }

        let id = tables.users.take_id();
        let user = User {
            id: UserId::new(id),
            username: new_user.username,
            password: new_user.password,
        };
        tables.users.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn user(&self, id: UserId) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.users.rows.get(&id.as_i32()).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        // Linear scan; the collection stays small and usernames are unique.
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .rows
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_contact_inquiry(
        &self,
        new_inquiry: NewContactInquiry,
    ) -> Result<ContactInquiry, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.contact_inquiries.take_id();
        let inquiry = ContactInquiry {
            id: ContactInquiryId::new(id),
            name: new_inquiry.name,
            email: new_inquiry.email,
            company: new_inquiry.company,
            interest: new_inquiry.interest,
            message: new_inquiry.message,
            created_at: Utc::now(),
        };
        tables.contact_inquiries.rows.insert(id, inquiry.clone());
        Ok(inquiry)
    }

    async fn contact_inquiry(
        &self,
        id: ContactInquiryId,
    ) -> Result<Option<ContactInquiry>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.contact_inquiries.rows.get(&id.as_i32()).cloned())
    }

    async fn create_demo_request(
        &self,
        new_request: NewDemoRequest,
    ) -> Result<DemoRequest, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.demo_requests.take_id();
        let request = DemoRequest {
            id: DemoRequestId::new(id),
            name: new_request.name,
            email: new_request.email,
            company: new_request.company,
            phone: new_request.phone,
            product_interest: new_request.product_interest,
            message: new_request.message,
            created_at: Utc::now(),
        };
        tables.demo_requests.rows.insert(id, request.clone());
        Ok(request)
    }

    async fn demo_request(&self, id: DemoRequestId) -> Result<Option<DemoRequest>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.demo_requests.rows.get(&id.as_i32()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inquiry() -> NewContactInquiry {
        NewContactInquiry {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            company: "Analytical Engines".to_owned(),
            interest: "hrms".to_owned(),
            message: "Interested in a pilot".to_owned(),
        }
    }

    fn sample_demo_request() -> NewDemoRequest {
        NewDemoRequest {
            name: "Grace Hopper".to_owned(),
            email: "grace@example.com".to_owned(),
            company: "Hopper Inc".to_owned(),
            phone: None,
            product_interest: "payroll".to_owned(),
            message: None,
        }
    }

    #[tokio::test]
    async fn contact_ids_start_at_one_and_increase() {
        let storage = MemStorage::new();

        let first = storage
            .create_contact_inquiry(sample_inquiry())
            .await
            .expect("create");
        let second = storage
            .create_contact_inquiry(sample_inquiry())
            .await
            .expect("create");

        assert_eq!(first.id.as_i32(), 1);
        assert_eq!(second.id.as_i32(), 2);
    }

    #[tokio::test]
    async fn each_entity_kind_has_its_own_counter() {
        let storage = MemStorage::new();

        let inquiry = storage
            .create_contact_inquiry(sample_inquiry())
            .await
            .expect("create inquiry");
        let request = storage
            .create_demo_request(sample_demo_request())
            .await
            .expect("create request");
        let user = storage
            .create_user(NewUser {
                username: "ada".to_owned(),
                password: "s3cret".to_owned(),
            })
            .await
            .expect("create user");

        assert_eq!(inquiry.id.as_i32(), 1);
        assert_eq!(request.id.as_i32(), 1);
        assert_eq!(user.id.as_i32(), 1);
    }

    #[tokio::test]
    async fn created_records_roundtrip_by_id() {
        let storage = MemStorage::new();

        let inquiry = storage
            .create_contact_inquiry(sample_inquiry())
            .await
            .expect("create inquiry");
        let fetched = storage
            .contact_inquiry(inquiry.id)
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(fetched, inquiry);

        let request = storage
            .create_demo_request(sample_demo_request())
            .await
            .expect("create request");
        let fetched = storage
            .demo_request(request.id)
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(fetched, request);
    }

    #[tokio::test]
    async fn missing_ids_are_absent_not_errors() {
        let storage = MemStorage::new();

        assert!(
            storage
                .contact_inquiry(ContactInquiryId::new(99))
                .await
                .expect("lookup")
                .is_none()
        );
        assert!(
            storage
                .user(UserId::new(99))
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let storage = MemStorage::new();

        let new_user = NewUser {
            username: "ada".to_owned(),
            password: "s3cret".to_owned(),
        };

        storage
            .create_user(new_user.clone())
            .await
            .expect("first create succeeds");

        let err = storage
            .create_user(new_user)
            .await
            .expect_err("second create fails");
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn user_lookup_by_username() {
        let storage = MemStorage::new();

        let created = storage
            .create_user(NewUser {
                username: "grace".to_owned(),
                password: "hunter2".to_owned(),
            })
            .await
            .expect("create");

        let found = storage
            .user_by_username("grace")
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found, created);

        assert!(
            storage
                .user_by_username("nobody")
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[tokio::test]
    async fn demo_request_keeps_optional_fields() {
        let storage = MemStorage::new();

        let request = storage
            .create_demo_request(NewDemoRequest {
                phone: Some("+1 555 0100".to_owned()),
                message: Some("Next week if possible".to_owned()),
                ..sample_demo_request()
            })
            .await
            .expect("create");

        assert_eq!(request.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(request.message.as_deref(), Some("Next week if possible"));
    }
}
