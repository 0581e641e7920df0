//! Shared constants for bankapi.

/// Environment variable overriding the SQLite database location.
pub const DB_PATH_ENV: &str = "BANKAPI_DB_PATH";

/// Environment variable overriding the connection pool size.
pub const DB_POOL_SIZE_ENV: &str = "BANKAPI_DB_POOL_SIZE";

/// Connection pool size when `BANKAPI_DB_POOL_SIZE` is unset.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// SQLite busy timeout applied to every pooled connection, in milliseconds.
pub const DB_BUSY_TIMEOUT_MS: u32 = 5000;

/// Default HTTP listen port.
pub const DEFAULT_HTTP_PORT: u16 = 7000;

/// Default HTTP listen host.
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Body of a successful client deletion.
pub const CLIENT_DELETED_MESSAGE: &str = "Client was successfully deleted";

/// Body of a client deletion that reported no change.
pub const CLIENT_DELETE_FAILED_MESSAGE: &str = "Failed to delete client";

/// Body of a successful account deletion.
pub const ACCOUNT_DELETED_MESSAGE: &str = "Account was successfully deleted";

/// Body of an account deletion that reported no change.
pub const ACCOUNT_DELETE_FAILED_MESSAGE: &str = "Failed to delete account";
