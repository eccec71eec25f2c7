//! Ticket endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use helpdesk_core::error::Result;
use helpdesk_core::ticket::{NewTicket, Ticket, TicketApi, TicketPatch};

#[async_trait]
impl TicketApi for ApiClient {
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.get_json("/tickets").await
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        self.post_json("/tickets", ticket).await
    }

    async fn update_ticket(&self, ticket_id: i64, patch: &TicketPatch) -> Result<Ticket> {
        self.patch_json(&format!("/tickets/{ticket_id}"), patch).await
    }

    async fn delete_ticket(&self, ticket_id: i64) -> Result<()> {
        self.delete_unit(&format!("/tickets/{ticket_id}")).await
    }
}
