//! Test utilities and module declarations for storage tests.

use bankapi_core::{AccountInput, ClientInput};
use tempfile::TempDir;

use crate::{AccountRepository, ClientRepository, Database};
use crate::{SqliteAccountRepository, SqliteClientRepository};

pub fn create_test_database() -> (Database, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let db = Database::open_with_pool_size(&db_path, 2).unwrap();
    (db, temp_dir)
}

/// Insert a client and return its generated id.
pub fn seed_client(db: &Database, first: &str, last: &str) -> i32 {
    let conn = db.connection().unwrap();
    SqliteClientRepository.add_client(&conn, &ClientInput::new(first, last)).unwrap().id
}

/// Insert an account for `client_id` and return its generated id.
pub fn seed_account(db: &Database, client_id: i32, account_type: &str, amount: i32) -> i32 {
    let conn = db.connection().unwrap();
    SqliteAccountRepository
        .add_account(&conn, client_id, &AccountInput::new(account_type, amount))
        .unwrap()
        .id
}

mod unit_of_work_tests;

#[test]
fn schema_version_recorded() {
    let (db, _temp_dir) = create_test_database();
    let conn = db.connection().unwrap();
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap();
    assert_eq!(version, crate::SCHEMA_VERSION);
}

#[test]
fn reopen_keeps_rows() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");
    {
        let db = Database::open_with_pool_size(&db_path, 1).unwrap();
        seed_client(&db, "Robert", "Bobby");
    }
    let db = Database::open_with_pool_size(&db_path, 1).unwrap();
    let conn = db.connection().unwrap();
    let clients = SqliteClientRepository.list_clients(&conn).unwrap();
    assert_eq!(clients.len(), 1);
}
