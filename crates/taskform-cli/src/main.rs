//! taskform: terminal front end for the task-manager API bindings.
//!
//! Each subcommand stands in for one host page: it seeds the page's fields
//! from the command line, fires the page's binding, and prints what the page
//! did (navigations, notices, rendered list items).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskform_core::config::ClientConfig;

mod commands;

#[derive(Parser)]
#[command(name = "taskform")]
#[command(about = "Form-to-request bindings for the task-manager API", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the auth form and follow where the page lands
    Login {
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
    },
    /// Submit the registration form
    CreateUser {
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
    },
    /// Submit the task-creation form
    CreateTask {
        /// Task name
        #[arg(long)]
        name: String,
    },
    /// Fetch and render the task list the way the listing button does
    Tasks,
    /// Fetch and render one task by its id
    Task { id: i64 },
    /// Run the index page: the listing fires on load, no button involved
    Index,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ClientConfig::load_from(cli.config.as_deref())?;
    init_tracing(config.log_json);

    match cli.command {
        Commands::Login { login, password } => {
            commands::login::run(&config, login, password).await
        }
        Commands::CreateUser { login, password } => {
            commands::create_user::run(&config, login, password).await
        }
        Commands::CreateTask { name } => commands::create_task::run(&config, name).await,
        Commands::Tasks => commands::tasks::list(&config).await,
        Commands::Task { id } => commands::tasks::show(&config, id).await,
        Commands::Index => commands::tasks::index(&config).await,
    }

    Ok(())
}

fn init_tracing(log_json: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
