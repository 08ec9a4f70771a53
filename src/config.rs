// src/config.rs

use std::{env, fmt, net::SocketAddr};

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub host: String,
    pub port: u16,
}

/// Raised when a required variable is missing or a value cannot be parsed.
#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {}: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url,
            rust_log,
            host,
            port,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            key: "HOST",
            value: self.host.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16) -> Config {
        Config {
            database_url: "postgres://localhost/trivia".to_string(),
            rust_log: "info".to_string(),
            host: host.to_string(),
            port,
        }
    }

    #[test]
    fn listen_addr_combines_host_and_port() {
        let addr = config("127.0.0.1", 5000).listen_addr().unwrap();
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 5000)));
    }

    #[test]
    fn listen_addr_rejects_hostnames() {
        let err = config("not a host", 5000).listen_addr().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "HOST", .. }));
    }
}
