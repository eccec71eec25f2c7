//! Per-ticket comment threads with lazy, memoized loading.

use helpdesk_core::comment::{Comment, CommentApi};
use helpdesk_core::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Caches comment lists per ticket.
///
/// A thread is fetched the first time it is asked for and served from the
/// cache afterwards; posting appends the server's echo of the new comment
/// instead of refetching the thread.
pub struct CommentThreads {
    api: Arc<dyn CommentApi>,
    cache: RwLock<HashMap<i64, Vec<Comment>>>,
}

impl CommentThreads {
    pub fn new(api: Arc<dyn CommentApi>) -> Self {
        Self {
            api,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the thread for a ticket, fetching it on first access.
    pub async fn load(&self, ticket_id: i64) -> Result<Vec<Comment>> {
        if let Some(comments) = self.cache.read().await.get(&ticket_id) {
            return Ok(comments.clone());
        }

        let comments = self.api.list_comments(ticket_id).await?;
        self.cache
            .write()
            .await
            .insert(ticket_id, comments.clone());
        Ok(comments)
    }

    /// Posts a comment and appends the stored copy to the cached thread.
    ///
    /// Whitespace-only content is dropped without a request; the caller gets
    /// `None` back.
    pub async fn post(&self, ticket_id: i64, content: &str) -> Result<Option<Comment>> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        let comment = self.api.add_comment(ticket_id, content).await?;
        self.cache
            .write()
            .await
            .entry(ticket_id)
            .or_default()
            .push(comment.clone());
        Ok(Some(comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubCommentApi {
        comments: Mutex<Vec<Comment>>,
        list_calls: AtomicUsize,
        post_calls: AtomicUsize,
    }

    impl StubCommentApi {
        fn new(comments: Vec<Comment>) -> Self {
            Self {
                comments: Mutex::new(comments),
                list_calls: AtomicUsize::new(0),
                post_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl CommentApi for StubCommentApi {
        async fn list_comments(&self, ticket_id: i64) -> Result<Vec<Comment>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .comments
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.ticket_id == ticket_id)
                .cloned()
                .collect())
        }

        async fn add_comment(&self, ticket_id: i64, content: &str) -> Result<Comment> {
            self.post_calls.fetch_add(1, Ordering::SeqCst);
            let comment = make_comment(99, ticket_id, content);
            self.comments.lock().unwrap().push(comment.clone());
            Ok(comment)
        }
    }

    fn make_comment(id: i64, ticket_id: i64, content: &str) -> Comment {
        Comment {
            id,
            ticket_id,
            author_id: 4,
            author_name: "Mia".to_string(),
            author_email: "mia@example.com".to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn second_load_is_served_from_cache() {
        let api = Arc::new(StubCommentApi::new(vec![make_comment(1, 10, "hi")]));
        let threads = CommentThreads::new(api.clone());

        let first = threads.load(10).await.unwrap();
        let second = threads.load(10).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn distinct_tickets_have_distinct_threads() {
        let api = Arc::new(StubCommentApi::new(vec![
            make_comment(1, 10, "hi"),
            make_comment(2, 20, "yo"),
        ]));
        let threads = CommentThreads::new(api.clone());

        assert_eq!(threads.load(10).await.unwrap().len(), 1);
        assert_eq!(threads.load(20).await.unwrap().len(), 1);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn post_appends_the_server_copy() {
        let api = Arc::new(StubCommentApi::new(vec![make_comment(1, 10, "hi")]));
        let threads = CommentThreads::new(api.clone());
        threads.load(10).await.unwrap();

        let posted = threads.post(10, "  reply  ").await.unwrap().unwrap();

        assert_eq!(posted.content, "reply");
        let thread = threads.load(10).await.unwrap();
        assert_eq!(thread.len(), 2);
        // Still the original fetch; the append did not invalidate the cache.
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_comment_is_not_sent() {
        let api = Arc::new(StubCommentApi::new(vec![]));
        let threads = CommentThreads::new(api.clone());

        let posted = threads.post(10, "   \n\t").await.unwrap();

        assert_eq!(posted, None);
        assert_eq!(api.post_calls.load(Ordering::SeqCst), 0);
    }
}
