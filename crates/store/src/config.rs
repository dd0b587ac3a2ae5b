//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Remote mode (both required together)
//! - `METEOR_REMOTE_URL` - Base URL of the hosted row-store
//! - `METEOR_REMOTE_KEY` - Access key for the hosted row-store
//!
//! ## Optional
//! - `METEOR_DATA_DIR` - Directory for the local fallback store
//!   (default: `.meteor-data`)
//! - `METEOR_LOCAL_LATENCY_MS` - Artificial per-operation delay in
//!   fallback mode, emulating a network round trip (default: off)
//! - `METEOR_CHECKOUT_DELAY_MS` - Simulated checkout processing time
//!   (default: 3000)
//!
//! Mode selection is a one-time decision: both remote values present at
//! startup means remote mode, anything else means fallback mode for the
//! life of the process.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default directory for the local fallback store.
const DEFAULT_DATA_DIR: &str = ".meteor-data";

/// Default simulated checkout processing time.
const DEFAULT_CHECKOUT_DELAY_MS: u64 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Remote row-store connection settings.
///
/// Implements `Debug` manually to redact the access key.
#[derive(Clone)]
pub struct RemoteConfig {
    /// Base URL of the hosted row-store.
    pub url: Url,
    /// Access key sent as both `apikey` and bearer token.
    pub key: SecretString,
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("url", &self.url.as_str())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Data-service configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Remote row-store settings; `None` keeps fallback mode active.
    pub remote: Option<RemoteConfig>,
    /// Directory backing the local key-value store.
    pub data_dir: PathBuf,
    /// Artificial latency applied to fallback operations.
    pub local_latency: Option<Duration>,
    /// Simulated checkout processing time.
    pub checkout_delay: Duration,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// If only one of the two remote values is set, the store stays in
    /// fallback mode and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let remote_url = optional_env("METEOR_REMOTE_URL");
        let remote_key = optional_env("METEOR_REMOTE_KEY");

        let remote = match (remote_url, remote_key) {
            (Some(url), Some(key)) => {
                let url = Url::parse(&url).map_err(|e| {
                    ConfigError::InvalidEnvVar("METEOR_REMOTE_URL".to_owned(), e.to_string())
                })?;
                Some(RemoteConfig {
                    url,
                    key: SecretString::from(key),
                })
            }
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "incomplete remote credentials, falling back to local storage mode"
                );
                None
            }
        };

        let data_dir = optional_env("METEOR_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let local_latency = parse_optional_ms("METEOR_LOCAL_LATENCY_MS")?
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        let checkout_delay = Duration::from_millis(
            parse_optional_ms("METEOR_CHECKOUT_DELAY_MS")?.unwrap_or(DEFAULT_CHECKOUT_DELAY_MS),
        );

        Ok(Self {
            remote,
            data_dir,
            local_latency,
            checkout_delay,
        })
    }

    /// A configuration pinned to fallback mode in the given directory,
    /// with no artificial delays. Intended for tests and tooling.
    #[must_use]
    pub fn local(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            remote: None,
            data_dir: data_dir.into(),
            local_latency: None,
            checkout_delay: Duration::ZERO,
        }
    }

    /// Whether the remote row-store is configured.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote.is_some()
    }
}

/// Read an environment variable, treating empty strings as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional millisecond environment variable.
fn parse_optional_ms(name: &str) -> Result<Option<u64>, ConfigError> {
    optional_env(name)
        .map(|v| {
            v.parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string()))
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config_is_fallback() {
        let config = StoreConfig::local("/tmp/meteor-test");
        assert!(!config.is_remote());
        assert!(config.local_latency.is_none());
        assert_eq!(config.checkout_delay, Duration::ZERO);
    }

    #[test]
    fn test_remote_config_debug_redacts_key() {
        let remote = RemoteConfig {
            url: Url::parse("https://example.supabase.co").unwrap(),
            key: SecretString::from("super-secret".to_owned()),
        };
        let debug = format!("{remote:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }
}
