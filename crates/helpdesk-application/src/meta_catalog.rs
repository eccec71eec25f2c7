//! Statuses and priorities: cached catalogs plus admin-side creation.

use helpdesk_core::error::Result;
use helpdesk_core::meta::{MetaApi, MetaItem};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Caches the status and priority catalogs.
///
/// Creation returns no body from the server, so a successful create refetches
/// the catalog; a rejected name (conflict or otherwise) leaves the cached
/// catalog exactly as it was.
pub struct MetaCatalog {
    api: Arc<dyn MetaApi>,
    statuses: RwLock<Vec<MetaItem>>,
    priorities: RwLock<Vec<MetaItem>>,
}

impl MetaCatalog {
    pub fn new(api: Arc<dyn MetaApi>) -> Self {
        Self {
            api,
            statuses: RwLock::new(Vec::new()),
            priorities: RwLock::new(Vec::new()),
        }
    }

    pub async fn refresh_statuses(&self) -> Result<()> {
        let statuses = self.api.list_statuses().await?;
        *self.statuses.write().await = statuses;
        Ok(())
    }

    pub async fn refresh_priorities(&self) -> Result<()> {
        let priorities = self.api.list_priorities().await?;
        *self.priorities.write().await = priorities;
        Ok(())
    }

    pub async fn statuses(&self) -> Vec<MetaItem> {
        self.statuses.read().await.clone()
    }

    pub async fn priorities(&self) -> Vec<MetaItem> {
        self.priorities.read().await.clone()
    }

    /// Creates a status, then refetches the catalog.
    pub async fn create_status(&self, name: &str) -> Result<()> {
        self.api.create_status(name).await?;
        self.refresh_statuses().await
    }

    /// Creates a priority, then refetches the catalog.
    pub async fn create_priority(&self, name: &str) -> Result<()> {
        self.api.create_priority(name).await?;
        self.refresh_priorities().await
    }
}
