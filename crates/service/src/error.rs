//! Typed error enum for the service layer.
//!
//! Each variant is one domain error kind. `Display` yields the caller-facing
//! message unchanged, so the HTTP layer can put it straight into the envelope.

use bankapi_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Not-found or database failure raised by a repository, passed through unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A path or query parameter that should be an integer was not.
    #[error("{0}")]
    BadParameter(String),

    /// Client creation rejected because a name was blank.
    #[error("{0}")]
    AddClient(String),

    /// Client update rejected because a name was blank.
    #[error("{0}")]
    UpdateClient(String),

    /// Account creation rejected because the account type was blank.
    #[error("{0}")]
    AddAccount(String),

    /// Account update rejected because the account type was blank.
    #[error("{0}")]
    UpdateAccount(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }

    /// Whether the caller sent something the service refuses to process.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
