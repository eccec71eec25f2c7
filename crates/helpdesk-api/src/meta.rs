//! Status/priority catalog endpoints.
//!
//! The server rejects duplicate names with a 409, or with a 4xx whose body
//! says so; either is surfaced as a `Conflict` so callers can show the
//! duplicate-name message instead of the generic failure text.

use crate::client::ApiClient;
use async_trait::async_trait;
use helpdesk_core::error::{HelpdeskError, Result};
use helpdesk_core::meta::{MetaApi, MetaItem};
use serde::Serialize;

#[derive(Serialize)]
struct NamePayload<'a> {
    name: &'a str,
}

fn duplicate_name_conflict(err: HelpdeskError, kind: &str, name: &str) -> HelpdeskError {
    match err {
        HelpdeskError::Conflict { .. } => err,
        // Some deployments answer duplicates with a plain 400 and only say
        // so in the body; anything else (401, 422, ...) stays a generic
        // Api error.
        HelpdeskError::Api { status, ref message }
            if (400..500).contains(&status) && mentions_duplicate(message) =>
        {
            HelpdeskError::conflict(format!("A {kind} named '{name}' already exists"))
        }
        other => other,
    }
}

fn mentions_duplicate(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("already exists") || message.contains("duplicate")
}

#[async_trait]
impl MetaApi for ApiClient {
    async fn list_statuses(&self) -> Result<Vec<MetaItem>> {
        self.get_json("/statuses").await
    }

    async fn list_priorities(&self) -> Result<Vec<MetaItem>> {
        self.get_json("/priorities").await
    }

    async fn create_status(&self, name: &str) -> Result<()> {
        self.post_unit("/statuses", &NamePayload { name })
            .await
            .map_err(|err| duplicate_name_conflict(err, "status", name))
    }

    async fn create_priority(&self, name: &str) -> Result<()> {
        self.post_unit("/priorities", &NamePayload { name })
            .await
            .map_err(|err| duplicate_name_conflict(err, "priority", name))
    }
}
