use bankapi_core::ClientInput;

use super::create_test_database;
use crate::{ClientRepository, SqliteClientRepository, StorageError};

#[test]
fn commit_on_success() {
    let (db, _temp_dir) = create_test_database();
    let created = db
        .unit_of_work(|conn| SqliteClientRepository.add_client(conn, &ClientInput::new("A", "B")))
        .unwrap();

    let conn = db.connection().unwrap();
    assert_eq!(SqliteClientRepository.get_client(&conn, created.id).unwrap().first_name, "A");
}

#[test]
fn rollback_on_error() {
    let (db, _temp_dir) = create_test_database();
    let result: Result<(), StorageError> = db.unit_of_work(|conn| {
        SqliteClientRepository.add_client(conn, &ClientInput::new("A", "B"))?;
        Err(StorageError::database("abort"))
    });
    assert_eq!(result.unwrap_err().to_string(), "abort");

    let conn = db.connection().unwrap();
    assert!(SqliteClientRepository.list_clients(&conn).unwrap().is_empty());
}

#[test]
fn with_connection_autocommits() {
    let (db, _temp_dir) = create_test_database();
    db.with_connection(|conn| SqliteClientRepository.add_client(conn, &ClientInput::new("A", "B")))
        .unwrap();
    let clients = db.with_connection(|conn| SqliteClientRepository.list_clients(conn)).unwrap();
    assert_eq!(clients.len(), 1);
}
