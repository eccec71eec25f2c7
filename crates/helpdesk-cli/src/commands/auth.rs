use anyhow::Result;
use clap::Subcommand;

use super::context::App;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a customer account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
}

pub async fn run(app: &App, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Login { email, password } => {
            let user = app.auth.login(&email, &password).await?;
            println!("Signed in as {} ({})", user.name, user.role);
        }
        AuthAction::Register {
            name,
            email,
            password,
        } => {
            let user = app.auth.register(&name, &email, &password).await?;
            println!("Account created; signed in as {}", user.name);
        }
        AuthAction::Logout => {
            app.auth.logout().await?;
            println!("Signed out");
        }
        AuthAction::Whoami => match app.auth.current_user().await {
            Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
            None => println!("Not signed in"),
        },
    }

    Ok(())
}
