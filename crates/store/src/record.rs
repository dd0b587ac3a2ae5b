//! The record abstraction shared by both backing stores.
//!
//! A [`Record`] is a row with an id: currently [`Product`](crate::models::Product)
//! and [`Slide`](crate::models::Slide). Each record type carries a `Draft`
//! (the create payload - it has no id field, so a client-supplied id is
//! unrepresentable) and a `Patch` (all-optional fields, shallow-merged over
//! the stored record on update).

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A storable row with a typed id.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Typed id newtype for this record.
    type Id: Copy
        + Eq
        + fmt::Debug
        + fmt::Display
        + From<i64>
        + Into<i64>
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Create payload. Carries every field except the id.
    type Draft: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Partial-update payload. Every field optional; `None` fields are
    /// left untouched on merge and skipped on the wire.
    type Patch: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Remote row-store table name.
    const TABLE: &'static str;

    /// Local key-value storage key (versioned).
    const STORAGE_KEY: &'static str;

    /// Human-readable entity label for error messages.
    const ENTITY: &'static str;

    /// This record's id.
    fn id(&self) -> Self::Id;

    /// Materialize a record from a draft and a store-assigned id.
    fn from_draft(draft: Self::Draft, id: Self::Id) -> Self;

    /// Shallow-merge a patch over this record.
    fn apply(&mut self, patch: Self::Patch);
}
