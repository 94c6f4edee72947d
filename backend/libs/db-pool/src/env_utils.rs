//! Environment variable parsing utilities
//!
//! Missing variables fall back to a default; present but unparsable
//! variables are reported instead of silently replaced.

use std::str::FromStr;
use thiserror::Error;

/// An environment variable was set to a value that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse environment variable {key}='{value}'")]
pub struct EnvVarError {
    pub key: String,
    pub value: String,
}

/// Read a string variable, falling back to `default` when unset
///
/// # Example
/// ```ignore
/// let host = env_or_default("DB_HOST", "localhost");
/// ```
pub fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a variable, falling back to `default` when unset
///
/// # Example
/// ```ignore
/// let port: u16 = parse_env_or_default("PORT", 3000)?;
/// ```
pub fn parse_env_or_default<T: FromStr>(key: &str, default: T) -> Result<T, EnvVarError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| EnvVarError {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_env_or_default() {
        std::env::remove_var("DB_POOL_TEST_HOST");
        assert_eq!(env_or_default("DB_POOL_TEST_HOST", "localhost"), "localhost");

        std::env::set_var("DB_POOL_TEST_HOST", "db.internal");
        assert_eq!(env_or_default("DB_POOL_TEST_HOST", "localhost"), "db.internal");
        std::env::remove_var("DB_POOL_TEST_HOST");
    }

    #[test]
    #[serial_test::serial]
    fn test_parse_env_or_default() {
        std::env::remove_var("DB_POOL_TEST_PORT");
        let result: Result<u16, _> = parse_env_or_default("DB_POOL_TEST_PORT", 5432);
        assert_eq!(result, Ok(5432));

        std::env::set_var("DB_POOL_TEST_PORT", " 6543 ");
        let result: Result<u16, _> = parse_env_or_default("DB_POOL_TEST_PORT", 5432);
        assert_eq!(result, Ok(6543));

        std::env::set_var("DB_POOL_TEST_PORT", "not_a_port");
        let result: Result<u16, _> = parse_env_or_default("DB_POOL_TEST_PORT", 5432);
        let err = result.unwrap_err();
        assert_eq!(err.key, "DB_POOL_TEST_PORT");
        assert_eq!(err.value, "not_a_port");
        assert!(err.to_string().contains("DB_POOL_TEST_PORT='not_a_port'"));

        std::env::remove_var("DB_POOL_TEST_PORT");
    }
}
