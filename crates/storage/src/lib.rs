//! Storage layer for bankapi
//!
//! SQLite-backed repositories for clients and accounts, a pooled connection
//! provider, and the unit-of-work boundary the services wrap around each call.

mod error;
mod migrations;
mod sqlite;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use rusqlite::Connection;
pub use sqlite::{Database, PooledConn, SqliteAccountRepository, SqliteClientRepository};
pub use traits::{AccountRepository, ClientRepository};
