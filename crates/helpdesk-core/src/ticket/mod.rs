//! Ticket domain module.
//!
//! - `model`: `Ticket`, write payloads and status/priority display labels
//! - `view`: filtering and grouping (`FilterCriteria`, `TicketGroup`)
//! - `api`: the remote seam for ticket endpoints

mod api;
mod model;
mod view;

pub use api::TicketApi;
pub use model::{
    DEFAULT_PRIORITY_ID, NewTicket, Ticket, TicketPatch, priority_label, status_label,
};
pub use view::{FilterCriteria, TicketGroup, group_tickets};
