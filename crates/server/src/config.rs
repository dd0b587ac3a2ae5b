//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `METEOR_HOST` - Bind address (default: 127.0.0.1)
//! - `METEOR_PORT` - Listen port (default: 3000)
//!
//! The data-service variables (`METEOR_REMOTE_URL`, `METEOR_REMOTE_KEY`,
//! `METEOR_DATA_DIR`, ...) are documented in `meteor_store::config`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use meteor_store::config::{ConfigError, StoreConfig};

const DEFAULT_PORT: u16 = 3000;

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Data-service configuration.
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store = StoreConfig::from_env()?;

        let host = match std::env::var("METEOR_HOST") {
            Ok(raw) => raw.parse::<IpAddr>().map_err(|e| {
                ConfigError::InvalidEnvVar("METEOR_HOST".to_owned(), e.to_string())
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("METEOR_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("METEOR_PORT".to_owned(), e.to_string())
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port, store })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
