//! Catalog entries for ticket statuses and priorities.

use serde::{Deserialize, Serialize};

/// One entry of the status or priority catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaItem {
    pub id: i64,
    pub name: String,
}
