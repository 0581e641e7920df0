use bankapi_core::{Client, ClientInput, ClientSummary};
use rusqlite::Connection;

use crate::error::StorageError;

/// Client persistence operations.
pub trait ClientRepository: Send + Sync {
    /// All clients, in storage order.
    fn list_clients(&self, conn: &Connection) -> Result<Vec<ClientSummary>, StorageError>;

    /// Client `client_id`, or `ClientNotFound`.
    fn get_client(&self, conn: &Connection, client_id: i32)
    -> Result<ClientSummary, StorageError>;

    /// Insert a client and return it with its generated id and no accounts.
    fn add_client(&self, conn: &Connection, input: &ClientInput) -> Result<Client, StorageError>;

    /// Replace both names of client `client_id`.
    fn update_client(
        &self,
        conn: &Connection,
        client_id: i32,
        input: &ClientInput,
    ) -> Result<ClientSummary, StorageError>;

    /// Delete client `client_id`. Returns `true` on success.
    fn delete_client(&self, conn: &Connection, client_id: i32) -> Result<bool, StorageError>;
}
