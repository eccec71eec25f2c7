use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::context::App;

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "Helpdesk ticketing client", long_about = None)]
struct Cli {
    /// Override the backend base URL from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in, sign out and account management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// List, create and update tickets
    Tickets {
        #[command(subcommand)]
        action: commands::tickets::TicketAction,
    },
    /// User administration
    Users {
        #[command(subcommand)]
        action: commands::users::UserAction,
    },
    /// Statuses and priorities
    Meta {
        #[command(subcommand)]
        action: commands::meta::MetaAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::init(cli.base_url).await?;

    match cli.command {
        Commands::Auth { action } => commands::auth::run(&app, action).await?,
        Commands::Tickets { action } => commands::tickets::run(&app, action).await?,
        Commands::Users { action } => commands::users::run(&app, action).await?,
        Commands::Meta { action } => commands::meta::run(&app, action).await?,
    }

    Ok(())
}
