//! Data-service error taxonomy.
//!
//! Remote-mode failures propagate to the caller unchanged in substance;
//! fallback-mode errors are constructed locally. Nothing here is retried -
//! a failed operation is reported once and the caller owns user-facing
//! messaging.

use thiserror::Error;

/// Errors produced by the catalog and slide data service.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity label ("product", "slide").
        entity: &'static str,
        /// The id that was looked up.
        id: i64,
    },

    /// The remote row-store reported a failure.
    #[error("backend error: {0}")]
    Backend(String),

    /// HTTP transport to the remote row-store failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A record or collection could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The local key-value store could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Construct a `NotFound` for an entity/id pair.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Whether this error means the record is absent (as opposed to the
    /// backend being unreachable or broken).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
