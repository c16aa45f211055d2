//! Domain models for the site.
//!
//! Each entity comes in two shapes: the full record as stored (with the
//! server-assigned ID and, where applicable, creation timestamp) and the
//! insertable form a caller supplies (`New*` structs).

pub mod contact;
pub mod demo;
pub mod user;

pub use contact::{ContactInquiry, NewContactInquiry};
pub use demo::{DemoRequest, NewDemoRequest};
pub use user::{NewUser, User};
