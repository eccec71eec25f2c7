//! Derived ticket views: filtering and per-creator grouping.

use super::model::Ticket;
use crate::user::Role;
use chrono::{Local, NaiveDate};

/// Optional constraints narrowing the visible ticket set.
///
/// Every present criterion must match exactly; an absent criterion is
/// vacuously true. All criteria are AND-combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub status_id: Option<i64>,
    pub priority_id: Option<i64>,
    pub assigned_to: Option<i64>,
    /// Matches the calendar date of `created_at` in the viewer's local
    /// timezone.
    pub created_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Whether the ticket satisfies every present criterion.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if self.status_id.is_some_and(|id| ticket.status_id != id) {
            return false;
        }
        if self.priority_id.is_some_and(|id| ticket.priority_id != id) {
            return false;
        }
        if self.assigned_to.is_some_and(|id| ticket.assigned_to != Some(id)) {
            return false;
        }
        if let Some(date) = self.created_date {
            let local_date = ticket.created_at.with_timezone(&Local).date_naive();
            if local_date != date {
                return false;
            }
        }
        true
    }
}

/// One cluster of tickets in the derived view.
///
/// Staff see one group per ticket creator; customers see a single unnamed
/// group (`key: None`).
#[derive(Debug, Clone, PartialEq)]
pub struct TicketGroup {
    pub key: Option<String>,
    pub tickets: Vec<Ticket>,
}

fn creator_key(ticket: &Ticket) -> String {
    format!("{} ({})", ticket.created_by_name, ticket.created_by_email)
}

/// Filters and groups a flat ticket list for display.
///
/// Groups appear in first-seen order of their key; within a group, source
/// order is preserved.
pub fn group_tickets(
    tickets: &[Ticket],
    filters: &FilterCriteria,
    viewer_role: Role,
) -> Vec<TicketGroup> {
    let filtered = tickets.iter().filter(|ticket| filters.matches(ticket));

    if !viewer_role.is_staff() {
        return vec![TicketGroup {
            key: None,
            tickets: filtered.cloned().collect(),
        }];
    }

    let mut groups: Vec<TicketGroup> = Vec::new();
    for ticket in filtered {
        let key = creator_key(ticket);
        match groups.iter_mut().find(|group| group.key.as_deref() == Some(&*key)) {
            Some(group) => group.tickets.push(ticket.clone()),
            None => groups.push(TicketGroup {
                key: Some(key),
                tickets: vec![ticket.clone()],
            }),
        }
    }
    groups
}
