//! Server settings from the environment.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 1960;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid SERVER_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read `SERVER_HOST` and `SERVER_PORT`. Unset or empty values fall back
    /// to all interfaces on port 1960.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(env::var("SERVER_HOST").ok(), env::var("SERVER_PORT").ok())
    }

    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Config, ConfigError> {
        let host = host
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port.filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
        };
        Ok(Config { host, port })
    }

    #[inline]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
