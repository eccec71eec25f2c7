//! Domain core of the helpdesk client.
//!
//! This crate holds the pure logic of the application: domain models, the
//! auth/session state machine, role-gated route guarding, the derived ticket
//! view, and the trait seams (`SessionStore`, `AuthApi`, `TicketApi`, ...)
//! that decouple that logic from HTTP and the filesystem. Implementations of
//! the seams live in `helpdesk-api` and `helpdesk-infrastructure`.

pub mod auth;
pub mod comment;
pub mod config;
pub mod error;
pub mod meta;
pub mod ticket;
pub mod user;

// Re-export common error type
pub use error::HelpdeskError;
