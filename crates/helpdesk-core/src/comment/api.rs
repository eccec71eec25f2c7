//! Remote API seam for ticket comments.

use super::model::Comment;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the server's comment endpoints.
#[async_trait]
pub trait CommentApi: Send + Sync {
    /// Fetches the comments of one ticket, oldest first.
    async fn list_comments(&self, ticket_id: i64) -> Result<Vec<Comment>>;

    /// Posts a comment and returns the server's copy (with its id).
    async fn add_comment(&self, ticket_id: i64, content: &str) -> Result<Comment>;
}
