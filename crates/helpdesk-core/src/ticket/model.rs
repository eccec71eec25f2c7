//! Ticket domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority preselected in the new-ticket form (Medium).
pub const DEFAULT_PRIORITY_ID: i64 = 2;

/// A support ticket as returned by the server.
///
/// The server owns tickets; the client holds a read-mostly cached copy and
/// refetches after every confirmed write instead of patching fields locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    pub description: String,
    pub status_id: i64,
    pub priority_id: i64,
    pub created_by: i64,
    pub created_by_name: String,
    pub created_by_email: String,
    pub assigned_to: Option<i64>,
    pub assigned_to_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
    pub priority_id: i64,
}

/// Partial PATCH body for a ticket. Absent fields are omitted from the JSON
/// so the server only touches what was sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
}

impl TicketPatch {
    pub fn status(status_id: i64) -> Self {
        Self {
            status_id: Some(status_id),
            ..Self::default()
        }
    }

    pub fn priority(priority_id: i64) -> Self {
        Self {
            priority_id: Some(priority_id),
            ..Self::default()
        }
    }

    pub fn assignee(agent_id: i64) -> Self {
        Self {
            assigned_to: Some(agent_id),
            ..Self::default()
        }
    }
}

/// Display label for a status code.
///
/// The well-known codes are fixed; anything else (admins can create new
/// statuses server-side) renders as "Unknown", never an error.
pub fn status_label(status_id: i64) -> &'static str {
    match status_id {
        1 => "Open",
        2 => "In Progress",
        3 => "Closed",
        _ => "Unknown",
    }
}

/// Display label for a priority code. Unknown codes render as "Unknown".
pub fn priority_label(priority_id: i64) -> &'static str {
    match priority_id {
        1 => "Low",
        2 => "Medium",
        3 => "High",
        _ => "Unknown",
    }
}
