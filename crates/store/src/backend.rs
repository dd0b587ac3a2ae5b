//! The backing-store capability.
//!
//! Both stores implement the same contract; the implementation is chosen
//! once at construction (see [`Store::connect`](crate::Store::connect))
//! and injected. There is no mode flag to consult afterwards.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::Record;

/// Uniform CRUD contract over one record collection.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// All records, ascending by id. In fallback mode this always
    /// succeeds, returning an empty list if nothing is seeded.
    async fn get_all(&self) -> Result<Vec<R>, StoreError>;

    /// A single record by id.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is absent (a store-reported
    /// no-row in remote mode, a scan miss in fallback mode).
    async fn get_by_id(&self, id: R::Id) -> Result<R, StoreError>;

    /// Store a new record. The store assigns the id; drafts cannot carry
    /// one. Returns the stored record.
    async fn create(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Shallow-merge `patch` over the record with this id and persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is absent, in both modes.
    async fn update(&self, id: R::Id, patch: R::Patch) -> Result<R, StoreError>;

    /// Remove the record with this id. Idempotent: succeeds in both modes
    /// even when the id was already absent.
    async fn delete(&self, id: R::Id) -> Result<(), StoreError>;
}
