//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_UPCOMING_DAYS;
use std::env;
use std::path::PathBuf;

/// Longest accepted birthday window, one leap year.
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted (default: "addressbook.json")
    pub address_book_path: PathBuf,

    /// Window for the `birthdays` command in days (default: 7)
    pub birthday_window_days: i64,

    /// Log level used when RUST_LOG is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Book file location (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which is the conversation channel
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let address_book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.address_book_path,
        };

        let birthday_window_days =
            Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if !(0..=MAX_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            address_book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address_book_path: PathBuf::from("addressbook.json"),
            birthday_window_days: DEFAULT_UPCOMING_DAYS,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["ADDRESS_BOOK_PATH", "BIRTHDAY_WINDOW_DAYS", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.address_book_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts.json");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.address_book_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ADDRESS_BOOK_PATH"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_window_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "-1");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_i64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_I64_INVALID", "seven");

        assert!(Config::parse_env_i64("TEST_I64_INVALID", 7).is_err());
        assert_eq!(Config::parse_env_i64("NONEXISTENT_I64", 7).unwrap(), 7);
    }
}
