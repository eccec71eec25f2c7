//! Remote API seam for the status/priority catalogs.

use super::model::MetaItem;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the server's status and priority endpoints.
///
/// Creating an entry whose name already exists yields a
/// [`HelpdeskError::Conflict`](crate::error::HelpdeskError::Conflict) so the
/// caller can show the duplicate-name message instead of a generic failure.
#[async_trait]
pub trait MetaApi: Send + Sync {
    async fn list_statuses(&self) -> Result<Vec<MetaItem>>;

    async fn list_priorities(&self) -> Result<Vec<MetaItem>>;

    /// Creates a status. The server returns no body; callers refetch the
    /// catalog to observe the new entry.
    async fn create_status(&self, name: &str) -> Result<()>;

    /// Creates a priority. Same contract as [`create_status`](Self::create_status).
    async fn create_priority(&self, name: &str) -> Result<()>;
}
