//! Cached ticket list with filtering and grouping.

use helpdesk_core::error::Result;
use helpdesk_core::ticket::{
    FilterCriteria, NewTicket, Ticket, TicketApi, TicketGroup, TicketPatch, group_tickets,
};
use helpdesk_core::user::Role;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the ticket list between server round-trips.
///
/// Mutations that change server-derived fields (status, priority, assignee
/// names) refetch the whole list; deletion only drops the row locally, so a
/// ticket deleted elsewhere stays visible until the next refresh.
pub struct TicketBoard {
    api: Arc<dyn TicketApi>,
    tickets: RwLock<Vec<Ticket>>,
}

impl TicketBoard {
    pub fn new(api: Arc<dyn TicketApi>) -> Self {
        Self {
            api,
            tickets: RwLock::new(Vec::new()),
        }
    }

    /// Replaces the cached list with the server's current view.
    pub async fn refresh(&self) -> Result<()> {
        let tickets = self.api.list_tickets().await?;
        *self.tickets.write().await = tickets;
        Ok(())
    }

    /// Snapshot of the cached tickets, unfiltered.
    pub async fn tickets(&self) -> Vec<Ticket> {
        self.tickets.read().await.clone()
    }

    /// Filters and groups the cached tickets for display.
    ///
    /// Staff see one group per ticket creator; customers see a single flat
    /// group of their own tickets.
    pub async fn view(&self, criteria: &FilterCriteria, viewer_role: Role) -> Vec<TicketGroup> {
        let tickets = self.tickets.read().await;
        group_tickets(&tickets, criteria, viewer_role)
    }

    /// Creates a ticket, then refetches the list.
    pub async fn create(&self, ticket: &NewTicket) -> Result<Ticket> {
        let created = self.api.create_ticket(ticket).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Applies a patch to one ticket, then refetches the list.
    pub async fn update(&self, ticket_id: i64, patch: &TicketPatch) -> Result<Ticket> {
        let updated = self.api.update_ticket(ticket_id, patch).await?;
        self.refresh().await?;
        Ok(updated)
    }

    /// Deletes a ticket and removes it from the cache without a refetch.
    pub async fn delete(&self, ticket_id: i64) -> Result<()> {
        self.api.delete_ticket(ticket_id).await?;
        self.tickets
            .write()
            .await
            .retain(|ticket| ticket.id != ticket_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use helpdesk_core::error::HelpdeskError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubTicketApi {
        tickets: Mutex<Vec<Ticket>>,
        list_calls: AtomicUsize,
    }

    impl StubTicketApi {
        fn new(tickets: Vec<Ticket>) -> Self {
            Self {
                tickets: Mutex::new(tickets),
                list_calls: AtomicUsize::new(0),
            }
        }

        fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl TicketApi for StubTicketApi {
        async fn list_tickets(&self) -> Result<Vec<Ticket>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.tickets.lock().unwrap().clone())
        }

        async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
            let mut tickets = self.tickets.lock().unwrap();
            let created = make_ticket(tickets.len() as i64 + 100, &ticket.subject);
            tickets.push(created.clone());
            Ok(created)
        }

        async fn update_ticket(&self, ticket_id: i64, patch: &TicketPatch) -> Result<Ticket> {
            let mut tickets = self.tickets.lock().unwrap();
            let ticket = tickets
                .iter_mut()
                .find(|t| t.id == ticket_id)
                .ok_or_else(|| HelpdeskError::api(404, None))?;
            if let Some(status_id) = patch.status_id {
                ticket.status_id = status_id;
            }
            Ok(ticket.clone())
        }

        async fn delete_ticket(&self, ticket_id: i64) -> Result<()> {
            self.tickets.lock().unwrap().retain(|t| t.id != ticket_id);
            Ok(())
        }
    }

    fn make_ticket(id: i64, subject: &str) -> Ticket {
        Ticket {
            id,
            subject: subject.to_string(),
            description: String::new(),
            status_id: 1,
            priority_id: 2,
            created_by: 5,
            created_by_name: "Kim".to_string(),
            created_by_email: "kim@example.com".to_string(),
            assigned_to: None,
            assigned_to_name: None,
            created_at: Utc::now(),
        }
    }

    fn ids(tickets: &[Ticket]) -> Vec<i64> {
        tickets.iter().map(|t| t.id).collect()
    }

    #[tokio::test]
    async fn refresh_fills_the_cache() {
        let api = Arc::new(StubTicketApi::new(vec![make_ticket(1, "a")]));
        let board = TicketBoard::new(api);

        assert!(board.tickets().await.is_empty());
        board.refresh().await.unwrap();
        assert_eq!(ids(&board.tickets().await), vec![1]);
    }

    #[tokio::test]
    async fn update_refetches_the_list() {
        let api = Arc::new(StubTicketApi::new(vec![make_ticket(1, "a")]));
        let board = TicketBoard::new(api.clone());
        board.refresh().await.unwrap();

        let updated = board.update(1, &TicketPatch::status(3)).await.unwrap();

        assert_eq!(updated.status_id, 3);
        assert_eq!(api.list_calls(), 2);
        assert_eq!(board.tickets().await[0].status_id, 3);
    }

    #[tokio::test]
    async fn create_refetches_the_list() {
        let api = Arc::new(StubTicketApi::new(vec![]));
        let board = TicketBoard::new(api.clone());
        board.refresh().await.unwrap();

        board
            .create(&NewTicket {
                subject: "printer".to_string(),
                description: "jam".to_string(),
                priority_id: 2,
            })
            .await
            .unwrap();

        assert_eq!(api.list_calls(), 2);
        assert_eq!(board.tickets().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_locally_without_refetch() {
        let tickets = vec![make_ticket(3, "a"), make_ticket(7, "b"), make_ticket(9, "c")];
        let api = Arc::new(StubTicketApi::new(tickets));
        let board = TicketBoard::new(api.clone());
        board.refresh().await.unwrap();

        board.delete(7).await.unwrap();

        assert_eq!(ids(&board.tickets().await), vec![3, 9]);
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn failed_update_leaves_cache_untouched() {
        let api = Arc::new(StubTicketApi::new(vec![make_ticket(1, "a")]));
        let board = TicketBoard::new(api.clone());
        board.refresh().await.unwrap();

        let err = board.update(42, &TicketPatch::status(3)).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(api.list_calls(), 1);
        assert_eq!(board.tickets().await[0].status_id, 1);
    }

    #[tokio::test]
    async fn view_groups_by_creator_for_staff() {
        let api = Arc::new(StubTicketApi::new(vec![make_ticket(1, "a")]));
        let board = TicketBoard::new(api);
        board.refresh().await.unwrap();

        let groups = board.view(&FilterCriteria::default(), Role::Agent).await;

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key.as_deref(), Some("Kim (kim@example.com)"));
    }
}
