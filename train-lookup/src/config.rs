//! Process configuration.
//!
//! Everything is read from environment variables once at start-up. The API
//! key has no default and is never compiled into the binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use crate::upstream::{DEFAULT_API_HOST, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TrainApiConfig};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default directory for static assets.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `BIND_ADDR` is not a socket address
    #[error("invalid BIND_ADDR {value:?}: expected host:port")]
    InvalidBindAddr { value: String },

    /// `TRAIN_API_TIMEOUT_SECS` is not a positive integer
    #[error("invalid TRAIN_API_TIMEOUT_SECS {value:?}: expected a positive number of seconds")]
    InvalidTimeout { value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API client settings
    pub api: TrainApiConfig,
    /// Address the web server listens on
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Treat set-but-empty the same as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("TRAIN_API_KEY").unwrap_or_else(|| {
            warn!("TRAIN_API_KEY not set; the train API will deny every lookup");
            String::new()
        });

        let timeout_secs = match var("TRAIN_API_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout { value }),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let api = TrainApiConfig::new(api_key)
            .with_api_host(var("TRAIN_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()))
            .with_base_url(
                var("TRAIN_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            )
            .with_timeout(timeout_secs);

        let bind_value = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_value })?;

        let static_dir = PathBuf::from(
            var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        );

        Ok(Self {
            api,
            bind_addr,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.api.api_key, "");
        assert_eq!(config.api.api_host, DEFAULT_API_HOST);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("TRAIN_API_KEY", "secret"),
            ("TRAIN_API_HOST", "example.test"),
            ("TRAIN_API_BASE_URL", "http://localhost:9000/train"),
            ("TRAIN_API_TIMEOUT_SECS", "5"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "/srv/assets"),
        ])
        .unwrap();

        assert_eq!(config.api.api_key, "secret");
        assert_eq!(config.api.api_host, "example.test");
        assert_eq!(config.api.base_url, "http://localhost:9000/train");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = load(&[("TRAIN_API_HOST", ""), ("BIND_ADDR", "  ")]).unwrap();
        assert_eq!(config.api.api_host, DEFAULT_API_HOST);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn invalid_bind_addr() {
        let err = load(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn invalid_timeout() {
        for value in ["abc", "0", "-3"] {
            let err = load(&[("TRAIN_API_TIMEOUT_SECS", value)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "{value}");
        }
    }
}
