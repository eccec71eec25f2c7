use anyhow::Result;
use clap::Subcommand;
use helpdesk_core::user::Role;

use super::context::App;

#[derive(Subcommand)]
pub enum MetaAction {
    /// List ticket statuses
    Statuses,
    /// List ticket priorities
    Priorities,
    /// Create a status
    NewStatus { name: String },
    /// Create a priority
    NewPriority { name: String },
}

pub async fn run(app: &App, action: MetaAction) -> Result<()> {
    match action {
        MetaAction::Statuses => {
            app.require_roles(&[]).await?;
            app.catalog.refresh_statuses().await?;
            for status in app.catalog.statuses().await {
                println!("#{} {}", status.id, status.name);
            }
        }
        MetaAction::Priorities => {
            app.require_roles(&[]).await?;
            app.catalog.refresh_priorities().await?;
            for priority in app.catalog.priorities().await {
                println!("#{} {}", priority.id, priority.name);
            }
        }
        MetaAction::NewStatus { name } => {
            app.require_roles(&[Role::Admin]).await?;
            app.catalog.create_status(&name).await?;
            println!("Created status {name}");
        }
        MetaAction::NewPriority { name } => {
            app.require_roles(&[Role::Admin]).await?;
            app.catalog.create_priority(&name).await?;
            println!("Created priority {name}");
        }
    }

    Ok(())
}
