//! Environment variable parsing with warn-level logging for invalid values.

use std::path::PathBuf;

use crate::{DB_PATH_ENV, DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_with_default(var, std::env::var(var).ok(), default)
}

fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Connection pool size from `BANKAPI_DB_POOL_SIZE`, never zero.
#[must_use]
pub fn db_pool_size() -> u32 {
    env_parse_with_default(DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE).max(1)
}

/// Database location: `BANKAPI_DB_PATH` if set, else the per-user data directory.
#[must_use]
pub fn default_db_path() -> PathBuf {
    match std::env::var_os(DB_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bankapi")
            .join("bank.db"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_value_is_parsed() {
        let result: u32 = parse_with_default("POOL", Some("42".to_owned()), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn invalid_value_falls_back() {
        let result: u32 = parse_with_default("POOL", Some("banana".to_owned()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn missing_value_falls_back() {
        let result: u32 = parse_with_default("POOL", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn empty_value_falls_back() {
        let result: u32 = parse_with_default("POOL", Some(String::new()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn default_db_path_ends_with_db_file() {
        assert!(default_db_path().extension().is_some());
    }
}
