use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use helpdesk_application::AppRoute;
use helpdesk_core::ticket::{
    DEFAULT_PRIORITY_ID, FilterCriteria, NewTicket, TicketPatch, priority_label, status_label,
};
use helpdesk_core::user::Role;

use super::context::App;

#[derive(Subcommand)]
pub enum TicketAction {
    /// List tickets, grouped by creator for staff
    List {
        /// Filter by status id
        #[arg(long)]
        status: Option<i64>,
        /// Filter by priority id
        #[arg(long)]
        priority: Option<i64>,
        /// Filter by assigned agent id
        #[arg(long)]
        assignee: Option<i64>,
        /// Filter by creation date (YYYY-MM-DD, local time)
        #[arg(long)]
        date: Option<String>,
    },
    /// Open a new ticket
    New {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        description: String,
        /// Priority id, defaults to Medium
        #[arg(long)]
        priority: Option<i64>,
    },
    /// Change a ticket's status
    SetStatus { id: i64, status: i64 },
    /// Change a ticket's priority
    SetPriority { id: i64, priority: i64 },
    /// Assign a ticket to an agent
    Assign { id: i64, agent: i64 },
    /// Delete a ticket
    Delete { id: i64 },
    /// Show a ticket's comment thread
    Comments { id: i64 },
    /// Add a comment to a ticket
    Comment { id: i64, content: String },
}

pub async fn run(app: &App, action: TicketAction) -> Result<()> {
    match action {
        TicketAction::List {
            status,
            priority,
            assignee,
            date,
        } => {
            app.require(AppRoute::Tickets).await?;
            let criteria = FilterCriteria {
                status_id: status,
                priority_id: priority,
                assigned_to: assignee,
                created_date: parse_date(date)?,
            };

            app.board.refresh().await?;
            let role = app.viewer_role().await?;
            for group in app.board.view(&criteria, role).await {
                if let Some(key) = &group.key {
                    println!("{key}");
                }
                for ticket in &group.tickets {
                    let assignee = ticket.assigned_to_name.as_deref().unwrap_or("-");
                    println!(
                        "  #{} [{}/{}] {} (assigned: {})",
                        ticket.id,
                        status_label(ticket.status_id),
                        priority_label(ticket.priority_id),
                        ticket.subject,
                        assignee,
                    );
                }
            }
        }
        TicketAction::New {
            subject,
            description,
            priority,
        } => {
            app.require(AppRoute::NewTicket).await?;
            let created = app
                .board
                .create(&NewTicket {
                    subject,
                    description,
                    priority_id: priority.unwrap_or(DEFAULT_PRIORITY_ID),
                })
                .await?;
            println!("Created ticket #{}", created.id);
        }
        TicketAction::SetStatus { id, status } => {
            app.require_roles(&[Role::Agent, Role::Admin]).await?;
            let updated = app.board.update(id, &TicketPatch::status(status)).await?;
            println!("Ticket #{} is now {}", updated.id, status_label(updated.status_id));
        }
        TicketAction::SetPriority { id, priority } => {
            app.require_roles(&[Role::Admin]).await?;
            let updated = app.board.update(id, &TicketPatch::priority(priority)).await?;
            println!(
                "Ticket #{} is now {}",
                updated.id,
                priority_label(updated.priority_id)
            );
        }
        TicketAction::Assign { id, agent } => {
            app.require_roles(&[Role::Admin]).await?;
            let updated = app.board.update(id, &TicketPatch::assignee(agent)).await?;
            let assignee = updated.assigned_to_name.as_deref().unwrap_or("-");
            println!("Ticket #{} assigned to {}", updated.id, assignee);
        }
        TicketAction::Delete { id } => {
            app.require(AppRoute::Tickets).await?;
            app.board.delete(id).await?;
            println!("Deleted ticket #{id}");
        }
        TicketAction::Comments { id } => {
            app.require(AppRoute::Tickets).await?;
            let comments = app.threads.load(id).await?;
            if comments.is_empty() {
                println!("No comments");
            }
            for comment in comments {
                println!(
                    "[{}] {} <{}>: {}",
                    comment.created_at.format("%Y-%m-%d %H:%M"),
                    comment.author_name,
                    comment.author_email,
                    comment.content,
                );
            }
        }
        TicketAction::Comment { id, content } => {
            app.require_roles(&[Role::Customer, Role::Agent]).await?;
            match app.threads.post(id, &content).await? {
                Some(comment) => println!("Added comment #{}", comment.id),
                None => println!("Nothing to add"),
            }
        }
    }

    Ok(())
}

fn parse_date(date: Option<String>) -> Result<Option<NaiveDate>> {
    date.map(|raw| {
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))
    })
    .transpose()
}
