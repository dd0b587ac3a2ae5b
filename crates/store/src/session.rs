//! Session identity storage.
//!
//! One string-keyed entry holding the serialized logged-in identity: read
//! once at client startup, written on login, cleared on logout. Passed
//! explicitly to whoever needs it - there is no ambient current-user
//! singleton.

use tracing::debug;

use crate::error::StoreError;
use crate::local::KvStore;
use crate::models::Identity;

/// Versioned storage key for the persisted identity.
const SESSION_KEY: &str = "meteor_session_v1";

/// Persisted logged-in identity.
#[derive(Clone)]
pub struct SessionStore {
    kv: KvStore,
}

impl SessionStore {
    /// Create the store over the shared key-value directory.
    #[must_use]
    pub const fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Persist the logged-in identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the identity cannot be written.
    pub fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        debug!(user_id = %identity.id, "session identity saved");
        self.kv.put(SESSION_KEY, identity)
    }

    /// The persisted identity, if someone is logged in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a stored identity exists but cannot be read.
    pub fn load(&self) -> Result<Option<Identity>, StoreError> {
        self.kv.get(SESSION_KEY)
    }

    /// Clear the persisted identity (logout). Succeeds when nobody is
    /// logged in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the entry cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        debug!("session identity cleared");
        self.kv.remove(SESSION_KEY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use meteor_core::{Email, Role, UserId};

    use super::*;

    fn identity() -> Identity {
        Identity {
            id: UserId::new(1),
            email: Email::parse("admin@store.com").unwrap(),
            name: "Admin User".to_owned(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_save_load_clear_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::new(KvStore::open(dir.path()).unwrap());

        assert!(session.load().unwrap().is_none());

        session.save(&identity()).unwrap();
        assert_eq!(session.load().unwrap(), Some(identity()));

        session.clear().unwrap();
        assert!(session.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_when_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::new(KvStore::open(dir.path()).unwrap());
        session.clear().unwrap();
    }
}
