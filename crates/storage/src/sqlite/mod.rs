//! `SQLite` storage implementation
//!
//! `Database` is the connection provider: a cloneable handle around an r2d2
//! pool. Repositories are stateless and run against whatever connection the
//! caller passes in.

mod accounts;
mod clients;

use std::path::Path;

use anyhow::Result;
use bankapi_core::{DB_BUSY_TIMEOUT_MS, db_pool_size};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::error::StorageError;
use crate::migrations;

pub use accounts::SqliteAccountRepository;
pub use clients::SqliteClientRepository;

/// Type alias for pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Connection provider wrapping the `SQLite` connection pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

/// Per-connection settings applied by the pool on every new connection.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(&format!(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = {DB_BUSY_TIMEOUT_MS};
         PRAGMA journal_mode = WAL;"
    ))
}

/// Id generated by the last successful INSERT on `conn`, if it fits the domain type.
pub(crate) fn generated_id(conn: &Connection) -> Option<i32> {
    match conn.last_insert_rowid() {
        0 => None,
        rowid => i32::try_from(rowid).ok(),
    }
}

impl Database {
    /// Open (creating if needed) the database at `db_path` with the configured pool size.
    pub fn open(db_path: &Path) -> Result<Self> {
        Self::open_with_pool_size(db_path, db_pool_size())
    }

    /// Open the database with an explicit pool size.
    pub fn open_with_pool_size(db_path: &Path, pool_size: u32) -> Result<Self> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        // Bootstrap the schema on the first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(
            pool_size = pool_size,
            path = %db_path.display(),
            "Storage initialized with connection pool"
        );

        Ok(Self { pool })
    }

    /// Check out one connection from the pool.
    pub fn connection(&self) -> Result<PooledConn, StorageError> {
        Ok(self.pool.get()?)
    }

    /// Run `f` on a pooled connection in auto-commit mode.
    pub fn with_connection<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<StorageError>,
    {
        let conn = self.connection()?;
        f(&*conn)
    }

    /// Run `f` as one unit of work.
    ///
    /// Checks out a connection, turns auto-commit off by opening a transaction,
    /// and commits only if `f` succeeds. On error or panic the transaction is
    /// dropped, which rolls it back, and the connection goes back to the pool.
    pub fn unit_of_work<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<StorageError>,
    {
        let mut conn = self.connection()?;
        let tx = conn.transaction().map_err(StorageError::from)?;
        let value = f(&*tx)?;
        tx.commit().map_err(StorageError::from)?;
        tracing::debug!("unit of work committed");
        Ok(value)
    }
}
