pub mod auth;
pub mod context;
pub mod meta;
pub mod tickets;
pub mod users;
