use bankapi_core::{Client, ClientInput, ClientSummary};
use rusqlite::{OptionalExtension, Row, params};

use super::generated_id;
use crate::error::StorageError;
use crate::traits::ClientRepository;

/// `SQLite` implementation of [`ClientRepository`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SqliteClientRepository;

impl SqliteClientRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn row_to_client(row: &Row<'_>) -> rusqlite::Result<ClientSummary> {
        Ok(ClientSummary {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
        })
    }
}

impl ClientRepository for SqliteClientRepository {
    fn list_clients(
        &self,
        conn: &rusqlite::Connection,
    ) -> Result<Vec<ClientSummary>, StorageError> {
        let mut stmt = conn.prepare("SELECT id, first_name, last_name FROM clients ORDER BY id")?;
        let clients =
            stmt.query_map([], Self::row_to_client)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(clients)
    }

    fn get_client(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
    ) -> Result<ClientSummary, StorageError> {
        conn.query_row(
            "SELECT id, first_name, last_name FROM clients WHERE id = ?1",
            params![client_id],
            Self::row_to_client,
        )
        .optional()?
        .ok_or_else(|| {
            StorageError::ClientNotFound(format!(
                "Couldn't find a client with that id. Id provided: {client_id}"
            ))
        })
    }

    fn add_client(
        &self,
        conn: &rusqlite::Connection,
        input: &ClientInput,
    ) -> Result<Client, StorageError> {
        let records_added = conn.execute(
            "INSERT INTO clients (first_name, last_name) VALUES (?1, ?2)",
            params![input.first_name, input.last_name],
        )?;
        if records_added != 1 {
            return Err(StorageError::database("Couldn't add a client to the database"));
        }

        let id = generated_id(conn).ok_or_else(|| {
            StorageError::database("Client id was not generated, and therefore adding a client failed")
        })?;
        Ok(Client::new(id, input.first_name.clone(), input.last_name.clone()))
    }

    fn update_client(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
        input: &ClientInput,
    ) -> Result<ClientSummary, StorageError> {
        let rows_affected = conn.execute(
            "UPDATE clients SET first_name = ?1, last_name = ?2 WHERE id = ?3",
            params![input.first_name, input.last_name, client_id],
        )?;
        if rows_affected != 1 {
            return Err(StorageError::ClientNotFound(
                "Couldn't update client because it doesnt exist.".to_owned(),
            ));
        }
        Ok(ClientSummary::new(client_id, input.first_name.clone(), input.last_name.clone()))
    }

    fn delete_client(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
    ) -> Result<bool, StorageError> {
        let rows_affected = conn.execute("DELETE FROM clients WHERE id = ?1", params![client_id])?;
        if rows_affected != 1 {
            return Err(StorageError::ClientNotFound(
                "Couldn't delete client because it doesnt exist.".to_owned(),
            ));
        }
        Ok(true)
    }
}
