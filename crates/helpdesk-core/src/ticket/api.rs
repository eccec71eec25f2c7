//! Remote API seam for tickets.

use super::model::{NewTicket, Ticket, TicketPatch};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the server's ticket endpoints.
///
/// Requests are asynchronous and not cancellable once issued; a caller that
/// loses interest simply drops the future's output.
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Fetches the full ticket list visible to the current session.
    async fn list_tickets(&self) -> Result<Vec<Ticket>>;

    /// Creates a ticket and returns the server's copy.
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket>;

    /// Applies a partial update (status/priority/assignment).
    async fn update_ticket(&self, ticket_id: i64, patch: &TicketPatch) -> Result<Ticket>;

    /// Deletes a ticket.
    async fn delete_ticket(&self, ticket_id: i64) -> Result<()>;
}
