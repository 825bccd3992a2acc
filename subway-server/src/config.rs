//! Server configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "SUBWAY_ADDR";

/// Environment variable controlling whether the demo map is preloaded.
pub const DEMO_VAR: &str = "SUBWAY_DEMO";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var} value {value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the subway map server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Whether to start with the demonstration network loaded.
    /// When false the server starts with an empty map.
    pub load_demo: bool,

    /// Default tracing filter, used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which returns the value of an
    /// environment variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|_| ConfigError {
                var: ADDR_VAR,
                value: value.clone(),
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = lookup(DEMO_VAR) {
            config.load_demo = parse_flag(&value).ok_or_else(|| ConfigError {
                var: DEMO_VAR,
                value: value.clone(),
                reason: "expected true or false",
            })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            load_demo: true,
            log_filter: "info,subway_server=debug".to_string(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.load_demo);
        assert_eq!(config.log_filter, "info,subway_server=debug");
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn custom_config() {
        let config =
            ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "0.0.0.0:8080"), (DEMO_VAR, "false")]))
                .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert!(!config.load_demo);
    }

    #[test]
    fn flag_spellings() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            let config = ServerConfig::from_lookup(lookup(&[(DEMO_VAR, value)])).unwrap();
            assert!(config.load_demo, "{value}");
        }
        for value in ["0", "false", "No", "off"] {
            let config = ServerConfig::from_lookup(lookup(&[(DEMO_VAR, value)])).unwrap();
            assert!(!config.load_demo, "{value}");
        }
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid SUBWAY_ADDR value \"localhost\": expected host:port"
        );
    }

    #[test]
    fn invalid_flag() {
        let err = ServerConfig::from_lookup(lookup(&[(DEMO_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid SUBWAY_DEMO value \"maybe\": expected true or false"
        );
    }
}
