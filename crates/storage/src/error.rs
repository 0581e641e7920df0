//! Typed error enum for the storage layer.
//!
//! Repositories surface exactly three failure modes: the client is missing,
//! the account is missing, or the database itself failed. The `Display` text of
//! each variant is the message shown to API callers.

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No client row matched the requested id.
    #[error("{0}")]
    ClientNotFound(String),

    /// No account row matched the requested ids.
    #[error("{0}")]
    AccountNotFound(String),

    /// SQL, pool or bookkeeping failure. The driver message is kept in `message`.
    #[error("{message}")]
    Database {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl StorageError {
    /// A database failure detected by repository bookkeeping rather than the driver.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database { message: message.into(), source: None }
    }

    /// Whether this error means the requested row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ClientNotFound(_) | Self::AccountNotFound(_))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database {
            message: format!("Something went wrong with the database. Exception message: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Database {
            message: format!(
                "Something went wrong when trying to get a connection. Exception message: {err}"
            ),
            source: Some(Box::new(err)),
        }
    }
}
