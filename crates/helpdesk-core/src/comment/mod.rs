//! Comment domain module.

mod api;
mod model;

pub use api::CommentApi;
pub use model::Comment;
