use bankapi_core::{Account, AccountInput};
use rusqlite::{OptionalExtension, Params, Row, params};

use super::generated_id;
use crate::error::StorageError;
use crate::traits::AccountRepository;

const SELECT_ACCOUNTS: &str = "SELECT id, accountType, amount, client_id FROM accounts";

/// `SQLite` implementation of [`AccountRepository`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SqliteAccountRepository;

impl SqliteAccountRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn row_to_account(row: &Row<'_>) -> rusqlite::Result<Account> {
        Ok(Account {
            id: row.get("id")?,
            account_type: row.get("accountType")?,
            amount: row.get("amount")?,
            client_id: row.get("client_id")?,
        })
    }

    fn query_accounts<P: Params>(
        conn: &rusqlite::Connection,
        filter: &str,
        params: P,
    ) -> Result<Vec<Account>, StorageError> {
        let sql = format!("{SELECT_ACCOUNTS} WHERE {filter} ORDER BY id");
        let mut stmt = conn.prepare(&sql)?;
        let accounts = stmt
            .query_map(params, Self::row_to_account)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(accounts)
    }
}

impl AccountRepository for SqliteAccountRepository {
    fn list_accounts(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
    ) -> Result<Vec<Account>, StorageError> {
        Self::query_accounts(conn, "client_id = ?1", params![client_id])
    }

    fn list_accounts_less_than(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
        amount_less_than: i32,
    ) -> Result<Vec<Account>, StorageError> {
        Self::query_accounts(
            conn,
            "client_id = ?1 AND amount < ?2",
            params![client_id, amount_less_than],
        )
    }

    fn list_accounts_greater_than(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
        amount_greater_than: i32,
    ) -> Result<Vec<Account>, StorageError> {
        Self::query_accounts(
            conn,
            "client_id = ?1 AND amount > ?2",
            params![client_id, amount_greater_than],
        )
    }

    fn list_accounts_between(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
        amount_greater_than: i32,
        amount_less_than: i32,
    ) -> Result<Vec<Account>, StorageError> {
        Self::query_accounts(
            conn,
            "client_id = ?1 AND amount > ?2 AND amount < ?3",
            params![client_id, amount_greater_than, amount_less_than],
        )
    }

    fn get_account(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
        account_id: i32,
    ) -> Result<Account, StorageError> {
        conn.query_row(
            &format!("{SELECT_ACCOUNTS} WHERE client_id = ?1 AND id = ?2"),
            params![client_id, account_id],
            Self::row_to_account,
        )
        .optional()?
        .ok_or_else(|| {
            StorageError::AccountNotFound(format!(
                "Couldn't find an account with the id provided. User provided: {account_id}"
            ))
        })
    }

    fn add_account(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
        input: &AccountInput,
    ) -> Result<Account, StorageError> {
        let records_added = conn.execute(
            "INSERT INTO accounts (accountType, amount, client_id) VALUES (?1, ?2, ?3)",
            params![input.account_type, input.amount, client_id],
        )?;
        if records_added != 1 {
            return Err(StorageError::database("Couldn't add an account to the database"));
        }

        let id = generated_id(conn).ok_or_else(|| {
            StorageError::database(
                "Account id was not generated, and therefore adding an account failed",
            )
        })?;
        Ok(input.clone().into_account(id, client_id))
    }

    fn update_account(
        &self,
        conn: &rusqlite::Connection,
        _client_id: i32,
        account_id: i32,
        input: &AccountInput,
    ) -> Result<Account, StorageError> {
        // Selected by account id only; the owner is reported back from the row.
        let owner: Option<i32> = conn
            .query_row(
                "UPDATE accounts SET accountType = ?1, amount = ?2 WHERE id = ?3
                 RETURNING client_id",
                params![input.account_type, input.amount, account_id],
                |row| row.get(0),
            )
            .optional()?;

        match owner {
            Some(owner) => Ok(input.clone().into_account(account_id, owner)),
            None => Err(StorageError::AccountNotFound(
                "Couldn't update client because it doesnt exist.".to_owned(),
            )),
        }
    }

    fn delete_account(
        &self,
        conn: &rusqlite::Connection,
        client_id: i32,
        account_id: i32,
    ) -> Result<bool, StorageError> {
        let rows_affected = conn.execute(
            "DELETE FROM accounts WHERE id = ?1 AND client_id = ?2",
            params![account_id, client_id],
        )?;
        if rows_affected != 1 {
            return Err(StorageError::AccountNotFound(
                "Couldn't delete account because it doesnt exist.".to_owned(),
            ));
        }
        Ok(true)
    }
}
