//! Local persistence fallback.
//!
//! Three independent serialized collections (products, slides, users) live
//! under fixed versioned keys in a [`KvStore`] directory. Every operation
//! reads or rewrites its whole collection - last writer wins, no partial
//! updates at the storage level. An optional artificial latency emulates a
//! network round trip; it defaults to off and is not a correctness
//! requirement.

pub mod kv;
pub mod seed;

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::backend::RecordStore;
use crate::error::StoreError;
use crate::ids::MonotonicId;
use crate::record::Record;

pub use kv::KvStore;

/// Fallback-mode backing store for one record collection.
#[derive(Debug)]
pub struct LocalStore<R: Record> {
    kv: KvStore,
    latency: Option<Duration>,
    ids: MonotonicId,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> LocalStore<R> {
    /// Open the collection, seeding it with `seed` if the storage key is
    /// absent (first use).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key-value store cannot be read or the
    /// seed cannot be written.
    pub fn open(
        kv: KvStore,
        seed: Vec<R>,
        latency: Option<Duration>,
    ) -> Result<Self, StoreError> {
        if !kv.contains(R::STORAGE_KEY) && !seed.is_empty() {
            debug!(key = R::STORAGE_KEY, records = seed.len(), "seeding collection");
            kv.put(R::STORAGE_KEY, &seed)?;
        }

        // Ids must stay above everything already stored so they are never
        // reused, even across reopens.
        let floor = kv
            .get::<Vec<R>>(R::STORAGE_KEY)?
            .unwrap_or_default()
            .iter()
            .map(|r| r.id().into())
            .max()
            .unwrap_or(0);

        Ok(Self {
            kv,
            latency,
            ids: MonotonicId::starting_at(floor),
            _record: PhantomData,
        })
    }

    async fn emulate_latency(&self) {
        if let Some(delay) = self.latency {
            tokio::time::sleep(delay).await;
        }
    }

    fn load(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.kv.get::<Vec<R>>(R::STORAGE_KEY)?.unwrap_or_default())
    }

    fn persist(&self, records: &[R]) -> Result<(), StoreError> {
        self.kv.put(R::STORAGE_KEY, &records)
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for LocalStore<R> {
    async fn get_all(&self) -> Result<Vec<R>, StoreError> {
        self.emulate_latency().await;
        let mut records = self.load()?;
        records.sort_by_key(|r| -> i64 { r.id().into() });
        Ok(records)
    }

    async fn get_by_id(&self, id: R::Id) -> Result<R, StoreError> {
        self.emulate_latency().await;
        let records = self.load()?;
        records
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::ENTITY, id))
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        self.emulate_latency().await;
        let record = R::from_draft(draft, R::Id::from(self.ids.next()));
        let mut records = self.load()?;
        records.push(record.clone());
        self.persist(&records)?;
        debug!(entity = R::ENTITY, id = %record.id(), "record created");
        Ok(record)
    }

    async fn update(&self, id: R::Id, patch: R::Patch) -> Result<R, StoreError> {
        self.emulate_latency().await;
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::ENTITY, id))?;
        record.apply(patch);
        let updated = record.clone();
        self.persist(&records)?;
        debug!(entity = R::ENTITY, id = %id, "record updated");
        Ok(updated)
    }

    async fn delete(&self, id: R::Id) -> Result<(), StoreError> {
        self.emulate_latency().await;
        let mut records = self.load()?;
        records.retain(|r| r.id() != id);
        self.persist(&records)?;
        debug!(entity = R::ENTITY, id = %id, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use meteor_core::{Price, ProductId};

    use super::*;
    use crate::models::{NewProduct, Product, ProductPatch};

    fn open_store(dir: &std::path::Path, seed: Vec<Product>) -> LocalStore<Product> {
        let kv = KvStore::open(dir).unwrap();
        LocalStore::open(kv, seed, None).unwrap()
    }

    fn draft(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_owned(),
            price: Price::zero(),
            category: "Casual".to_owned(),
            image: String::new(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path(), seed::sample_products());
        assert_eq!(store.get_all().await.unwrap().len(), 8);

        // A second open with a different seed must not reseed.
        drop(store);
        let store = open_store(dir.path(), Vec::new());
        assert_eq!(store.get_all().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_get_by_id_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path(), Vec::new());
        let err = store.get_by_id(ProductId::new(12345)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids_above_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path(), seed::sample_products());

        let first = store.create(draft("one")).await.unwrap();
        let second = store.create(draft("two")).await.unwrap();
        assert!(first.id.as_i64() > 8);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path(), Vec::new());
        let err = store
            .update(ProductId::new(1), ProductPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_absent_id_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path(), Vec::new());
        store.delete(ProductId::new(999)).await.unwrap();
    }
}
