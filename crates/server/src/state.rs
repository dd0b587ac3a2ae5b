//! Application state shared across handlers.

use std::sync::Arc;

use meteor_store::{Checkout, Store, StoreError};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the data service and
/// configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Store,
    checkout: Checkout,
}

impl AppState {
    /// Wire the data service from configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data service cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, StoreError> {
        let store = Store::connect(&config.store)?;
        let checkout = Checkout::new(config.store.checkout_delay);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                checkout,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the data service.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the checkout service.
    #[must_use]
    pub fn checkout(&self) -> &Checkout {
        &self.inner.checkout
    }
}
