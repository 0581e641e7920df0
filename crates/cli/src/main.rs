mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use bankapi_core::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, default_db_path};
use bankapi_storage::Database;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bankapi")]
#[command(about = "REST API for bank clients and their accounts", long_about = None)]
struct Cli {
    /// SQLite database file (default: $BANKAPI_DB_PATH or the user data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = DEFAULT_HTTP_HOST)]
        host: String,
    },
    /// Print every client as JSON
    Clients,
    /// Print the accounts of one client as JSON
    Accounts { client_id: String },
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn open_database(db: Option<PathBuf>) -> Result<Database> {
    let db_path = db.unwrap_or_else(default_db_path);
    ensure_db_dir(&db_path)?;
    Database::open(&db_path)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = open_database(cli.db)?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(db, port, &host).await,
        Commands::Clients => commands::query::clients(db),
        Commands::Accounts { client_id } => commands::query::accounts(db, &client_id),
    }
}
