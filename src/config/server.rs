//! Server settings read from the environment.

use std::path::PathBuf;

use crate::error::{PortfolioError, PortfolioResult};

/// Default content directory, relative to the working directory.
pub const DEFAULT_CONTENT_DIR: &str = "./content";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default crate log level when neither `RUST_LOG` nor `PORTFOLIO_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding the content YAML files (`PORTFOLIO_CONTENT_DIR`).
    pub content_dir: PathBuf,
    /// TCP port to listen on (`PORT`).
    pub port: u16,
    /// Crate log level (`PORTFOLIO_LOG`), applied when `RUST_LOG` is unset
    /// or unparsable.
    pub log_filter: String,
}

impl ServerConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> PortfolioResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> PortfolioResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_dir = lookup("PORTFOLIO_CONTENT_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| PortfolioError::InvalidSetting {
                    name: "PORT".to_string(),
                    message: format!("'{}' is not a valid port number: {}", raw, e),
                })?,
            None => DEFAULT_PORT,
        };

        let log_filter = match lookup("PORTFOLIO_LOG")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
        {
            Some(level) if LOG_LEVELS.contains(&level.as_str()) => level,
            Some(level) => {
                return Err(PortfolioError::InvalidSetting {
                    name: "PORTFOLIO_LOG".to_string(),
                    message: format!(
                        "'{}' is not one of {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ),
                });
            }
            None => DEFAULT_LOG_FILTER.to_string(),
        };

        Ok(Self {
            content_dir: PathBuf::from(content_dir),
            port,
            log_filter,
        })
    }

    /// Returns the `EnvFilter` directive used when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> String {
        format!("portfolio_stats={}", self.log_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.content_dir, PathBuf::from(DEFAULT_CONTENT_DIR));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_CONTENT_DIR", "/srv/portfolio"),
            ("PORT", "3000"),
            ("PORTFOLIO_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.content_dir, PathBuf::from("/srv/portfolio"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        match ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])) {
            Err(PortfolioError::InvalidSetting { name, message }) => {
                assert_eq!(name, "PORT");
                assert!(message.contains("eighty"));
            }
            other => panic!("Expected InvalidSetting error, got {:?}", other),
        }
    }

    #[test]
    fn test_rust_log_does_not_set_log_filter() {
        let config = ServerConfig::from_lookup(lookup_from(&[("RUST_LOG", "trace")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        match ServerConfig::from_lookup(lookup_from(&[("PORTFOLIO_LOG", "chatty")])) {
            Err(PortfolioError::InvalidSetting { name, .. }) => assert_eq!(name, "PORTFOLIO_LOG"),
            other => panic!("Expected InvalidSetting error, got {:?}", other),
        }
    }

    #[test]
    fn test_log_directive_targets_crate() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORTFOLIO_LOG", "WARN")])).unwrap();
        assert_eq!(config.log_directive(), "portfolio_stats=warn");
    }

    #[test]
    fn test_blank_content_dir_uses_default() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("PORTFOLIO_CONTENT_DIR", "  ")])).unwrap();
        assert_eq!(config.content_dir, PathBuf::from(DEFAULT_CONTENT_DIR));
    }
}
