use anyhow::Result;
use clap::Subcommand;
use helpdesk_application::AppRoute;
use helpdesk_core::user::{NewUser, Role, UserApi};

use super::context::App;

#[derive(Subcommand)]
pub enum UserAction {
    /// List all users
    List,
    /// List agents only
    Agents,
    /// Create a user with an explicit role
    New {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: Role,
    },
}

pub async fn run(app: &App, action: UserAction) -> Result<()> {
    match action {
        UserAction::List => {
            app.require(AppRoute::Users).await?;
            for user in app.users.list_users().await? {
                println!("#{} {} <{}> ({})", user.id, user.name, user.email, user.role);
            }
        }
        UserAction::Agents => {
            app.require(AppRoute::Users).await?;
            for user in app.users.list_agents().await? {
                println!("#{} {} <{}>", user.id, user.name, user.email);
            }
        }
        UserAction::New {
            name,
            email,
            password,
            role,
        } => {
            app.require(AppRoute::NewUser).await?;
            let user = app
                .users
                .create_user(&NewUser {
                    name,
                    email,
                    password,
                    role,
                })
                .await?;
            println!("Created user #{} ({})", user.id, user.role);
        }
    }

    Ok(())
}
