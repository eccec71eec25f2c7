//! Comment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a ticket.
///
/// Append-only from the client's perspective; ids are assigned by the
/// server and never fabricated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub ticket_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
