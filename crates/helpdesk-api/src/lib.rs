//! reqwest-backed implementation of the remote API seams.
//!
//! [`ApiClient`] implements every `*Api` trait from `helpdesk-core` against
//! the helpdesk REST contract, plus `TokenSink` for bearer-token rotation.

mod auth;
mod client;
mod comments;
mod meta;
mod tickets;
mod users;

pub use client::ApiClient;
