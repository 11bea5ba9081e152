//! Fixture configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FIXTURE_HOST` - Bind address (default: 127.0.0.1)
//! - `FIXTURE_PORT` - Listen port (default: 3100)
//! - `FIXTURE_INITIAL_USER` - Seeded email to start logged in as

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Fixture server configuration.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Seeded email to start logged in as
    pub initial_user: Option<String>,
}

impl FixtureConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` when a set variable fails to
    /// parse; unset variables use their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("FIXTURE_HOST") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("FIXTURE_HOST".to_string(), value))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("FIXTURE_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("FIXTURE_PORT".to_string(), value))?,
            Err(_) => 3100,
        };

        let initial_user = std::env::var("FIXTURE_INITIAL_USER").ok();

        Ok(Self {
            host,
            port,
            initial_user,
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = FixtureConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3100,
            initial_user: None,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3100");
    }
}
