//! Process configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CATALOG_BIND_ADDR` | `0.0.0.0:5000` | Listener address |
//! | `DATABASE_URL` | unset | Postgres URL; unset means the in-memory store |
//! | `CATALOG_LOG_FORMAT` | `json` | `json` or `pretty` |

use std::net::SocketAddr;

use thiserror::Error;

use catalog_observability::{LogFormat, ParseLogFormatError};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CATALOG_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid CATALOG_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub database_url: Option<String>,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a map here).
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_value = get("CATALOG_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let log_format = match get("CATALOG_LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.database_url, None);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_all_variables() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("CATALOG_BIND_ADDR", "127.0.0.1:8081"),
            ("DATABASE_URL", "postgres://localhost/catalog"),
            ("CATALOG_LOG_FORMAT", "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8081".parse().unwrap());
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/catalog"));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn empty_database_url_means_in_memory() {
        let config = ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = ApiConfig::from_lookup(lookup(&[("CATALOG_BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));

        let err = ApiConfig::from_lookup(lookup(&[("CATALOG_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(_)));
    }
}
