//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `EUREKA_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::fetch::DEFAULT_FETCH_TIMEOUT_SECS;
use crate::judge::DEFAULT_JUDGE_MODEL;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `EUREKA_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the SQLite database file. Default: `./eureka.db`.
    pub db_path: PathBuf,

    /// Model identifier for the judge. Default: `gpt-4o-mini`.
    pub judge_model: String,

    /// Per-request timeout for article fetching, in seconds. Default: `30`.
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            db_path: PathBuf::from("./eureka.db"),
            judge_model: DEFAULT_JUDGE_MODEL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "EUREKA_PORT";
    const ENV_BIND_ADDR: &'static str = "EUREKA_BIND_ADDR";
    const ENV_DB_PATH: &'static str = "EUREKA_DB_PATH";
    const ENV_JUDGE_MODEL: &'static str = "EUREKA_JUDGE_MODEL";
    const ENV_FETCH_TIMEOUT_SECS: &'static str = "EUREKA_FETCH_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let db_path = Self::parse_path_from_env(Self::ENV_DB_PATH, defaults.db_path);
        let judge_model = Self::parse_string_from_env(Self::ENV_JUDGE_MODEL, defaults.judge_model);
        let fetch_timeout_secs =
            Self::parse_u64_from_env(Self::ENV_FETCH_TIMEOUT_SECS, defaults.fetch_timeout_secs);

        Ok(Self {
            port,
            bind_addr,
            db_path,
            judge_model,
            fetch_timeout_secs,
        })
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
