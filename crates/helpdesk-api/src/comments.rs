//! Comment endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use helpdesk_core::comment::{Comment, CommentApi};
use helpdesk_core::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct NewCommentRequest<'a> {
    content: &'a str,
}

#[async_trait]
impl CommentApi for ApiClient {
    async fn list_comments(&self, ticket_id: i64) -> Result<Vec<Comment>> {
        self.get_json(&format!("/tickets/{ticket_id}/comments")).await
    }

    async fn add_comment(&self, ticket_id: i64, content: &str) -> Result<Comment> {
        self.post_json(
            &format!("/tickets/{ticket_id}/comments"),
            &NewCommentRequest { content },
        )
        .await
    }
}
