//! Use cases for the helpdesk client.
//!
//! Each use case owns a piece of client state (auth session, ticket list,
//! comment threads, meta catalogs) and talks to the backend through the
//! trait seams in `helpdesk-core`, so every one of them is testable with
//! in-memory stubs.

mod auth_usecase;
mod comment_threads;
mod meta_catalog;
mod navigation;
mod ticket_board;

pub use auth_usecase::AuthUseCase;
pub use comment_threads::CommentThreads;
pub use meta_catalog::MetaCatalog;
pub use navigation::{AppRoute, Navigator};
pub use ticket_board::TicketBoard;
