//! Read-only commands that print JSON straight from the services.

use anyhow::Result;
use bankapi_service::{AccountService, ClientService};
use bankapi_storage::Database;

pub(crate) fn clients(db: Database) -> Result<()> {
    let clients = ClientService::new(db).list_clients()?;
    println!("{}", serde_json::to_string_pretty(&clients)?);
    Ok(())
}

/// Resolves the client first so an unknown id is reported as such.
pub(crate) fn accounts(db: Database, client_id: &str) -> Result<()> {
    ClientService::new(db.clone()).get_client_by_id(client_id)?;
    let accounts = AccountService::new(db).list_accounts(client_id)?;
    println!("{}", serde_json::to_string_pretty(&accounts)?);
    Ok(())
}
