//! The data-service façade.
//!
//! [`Store::connect`] decides the backing store exactly once, from the
//! presence of remote credentials in [`StoreConfig`], and wires every
//! collection service to it. Callers hold a [`Store`] (or the individual
//! [`RecordService`]s) and never consult mode state again.

use std::sync::Arc;

use tracing::info;

use crate::auth::AuthService;
use crate::backend::RecordStore;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::local::{KvStore, LocalStore, seed};
use crate::models::{Product, Slide};
use crate::record::Record;
use crate::remote::RemoteStore;
use crate::session::SessionStore;

/// Which backing store was selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hosted row-store.
    Remote,
    /// Local key-value fallback.
    Fallback,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Uniform CRUD surface over one record collection.
///
/// Thin wrapper over the injected [`RecordStore`]; this is the only
/// surface callers see.
#[derive(Clone)]
pub struct RecordService<R: Record> {
    backend: Arc<dyn RecordStore<R>>,
}

impl<R: Record> RecordService<R> {
    /// Wrap a backing store.
    #[must_use]
    pub fn new(backend: Arc<dyn RecordStore<R>>) -> Self {
        Self { backend }
    }

    /// All records, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`]/[`StoreError::Http`] if the remote
    /// call fails; fallback mode always succeeds.
    pub async fn get_all(&self) -> Result<Vec<R>, StoreError> {
        self.backend.get_all().await
    }

    /// A single record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent.
    pub async fn get_by_id(&self, id: R::Id) -> Result<R, StoreError> {
        self.backend.get_by_id(id).await
    }

    /// Store a new record; the backing store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        self.backend.create(draft).await
    }

    /// Shallow-merge `patch` over the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent.
    pub async fn update(&self, id: R::Id, patch: R::Patch) -> Result<R, StoreError> {
        self.backend.update(id, patch).await
    }

    /// Remove a record. Idempotent: absent ids succeed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the removal fails.
    pub async fn delete(&self, id: R::Id) -> Result<(), StoreError> {
        self.backend.delete(id).await
    }
}

/// The assembled data service: catalog, slides, demo auth, and session
/// identity storage.
#[derive(Clone)]
pub struct Store {
    mode: Mode,
    products: RecordService<Product>,
    slides: RecordService<Slide>,
    auth: AuthService,
    session: SessionStore,
}

impl Store {
    /// Select the backing store from configuration and wire everything up.
    ///
    /// Remote mode requires both the remote URL and key; otherwise the
    /// local fallback is opened (and seeded on first use). Authentication
    /// and session identity always live in the local store - only products
    /// and slides ever reach the remote row-store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the local store cannot be opened or the
    /// remote client cannot be constructed.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let kv = KvStore::open(&config.data_dir)?;

        let (mode, products, slides) = if let Some(remote_config) = &config.remote {
            let remote = RemoteStore::new(remote_config)?;
            (
                Mode::Remote,
                RecordService::new(Arc::new(remote.clone()) as Arc<dyn RecordStore<Product>>),
                RecordService::new(Arc::new(remote) as Arc<dyn RecordStore<Slide>>),
            )
        } else {
            let products = LocalStore::open(
                kv.clone(),
                seed::sample_products(),
                config.local_latency,
            )?;
            let slides =
                LocalStore::open(kv.clone(), seed::sample_slides(), config.local_latency)?;
            (
                Mode::Fallback,
                RecordService::new(Arc::new(products) as Arc<dyn RecordStore<Product>>),
                RecordService::new(Arc::new(slides) as Arc<dyn RecordStore<Slide>>),
            )
        };

        info!(%mode, "data service connected");

        Ok(Self {
            mode,
            products,
            slides,
            auth: AuthService::new(kv.clone(), config.local_latency),
            session: SessionStore::new(kv),
        })
    }

    /// Which backing store was selected at startup.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The product collection.
    #[must_use]
    pub const fn products(&self) -> &RecordService<Product> {
        &self.products
    }

    /// The slide collection.
    #[must_use]
    pub const fn slides(&self) -> &RecordService<Slide> {
        &self.slides
    }

    /// Demo authentication.
    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Session identity storage.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Cheap reachability probe for readiness checks: lists the product
    /// collection (served from cache in remote mode).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing store is unreachable.
    pub async fn probe(&self) -> Result<(), StoreError> {
        self.products.get_all().await.map(|_| ())
    }
}
