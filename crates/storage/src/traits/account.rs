use bankapi_core::{Account, AccountInput};
use rusqlite::Connection;

use crate::error::StorageError;

/// Account persistence operations.
pub trait AccountRepository: Send + Sync {
    /// All accounts owned by `client_id`, in storage order.
    fn list_accounts(&self, conn: &Connection, client_id: i32)
    -> Result<Vec<Account>, StorageError>;

    /// Accounts owned by `client_id` with `amount < amount_less_than`.
    fn list_accounts_less_than(
        &self,
        conn: &Connection,
        client_id: i32,
        amount_less_than: i32,
    ) -> Result<Vec<Account>, StorageError>;

    /// Accounts owned by `client_id` with `amount > amount_greater_than`.
    fn list_accounts_greater_than(
        &self,
        conn: &Connection,
        client_id: i32,
        amount_greater_than: i32,
    ) -> Result<Vec<Account>, StorageError>;

    /// Accounts owned by `client_id` strictly between the two bounds.
    fn list_accounts_between(
        &self,
        conn: &Connection,
        client_id: i32,
        amount_greater_than: i32,
        amount_less_than: i32,
    ) -> Result<Vec<Account>, StorageError>;

    /// Account `account_id` owned by `client_id`, or `AccountNotFound`.
    fn get_account(
        &self,
        conn: &Connection,
        client_id: i32,
        account_id: i32,
    ) -> Result<Account, StorageError>;

    /// Insert an account for `client_id` and return it with its generated id.
    fn add_account(
        &self,
        conn: &Connection,
        client_id: i32,
        input: &AccountInput,
    ) -> Result<Account, StorageError>;

    /// Replace type and amount of account `account_id`.
    ///
    /// The row is selected by account id alone; `client_id` does not narrow it.
    fn update_account(
        &self,
        conn: &Connection,
        client_id: i32,
        account_id: i32,
        input: &AccountInput,
    ) -> Result<Account, StorageError>;

    /// Delete account `account_id` owned by `client_id`. Returns `true` on success.
    fn delete_account(
        &self,
        conn: &Connection,
        client_id: i32,
        account_id: i32,
    ) -> Result<bool, StorageError>;
}
