//! Demo authentication service.
//!
//! DEMO ONLY. Two hardcoded identities plus a locally persisted
//! registered-user list with plaintext passwords. No hashing, no session
//! tokens, no expiry - the caller holds the returned [`Identity`] for the
//! session's lifetime. Acceptable solely because this is demo scaffolding;
//! never carry this module into a production credential path.

mod error;

pub use error::AuthError;

use std::time::Duration;

use meteor_core::{Email, Role, UserId};
use tracing::{debug, instrument};

use crate::ids::MonotonicId;
use crate::local::KvStore;
use crate::models::{Identity, StoredUser};

/// Versioned storage key for the registered-user list.
const USERS_KEY: &str = "meteor_users_v3";

/// Hardcoded demo admin account.
const DEMO_ADMIN: (&str, &str, &str) = ("admin@store.com", "admin123", "Admin User");

/// Hardcoded demo shopper account.
const DEMO_USER: (&str, &str, &str) = ("user@store.com", "user123", "Demo User");

/// Email/password login and self-registration against the local user list.
#[derive(Clone)]
pub struct AuthService {
    kv: KvStore,
    latency: Option<Duration>,
    ids: std::sync::Arc<MonotonicId>,
}

impl AuthService {
    /// Create the service over the shared key-value store. The user
    /// collection starts empty; nothing is seeded.
    #[must_use]
    pub fn new(kv: KvStore, latency: Option<Duration>) -> Self {
        Self {
            kv,
            latency,
            ids: std::sync::Arc::new(MonotonicId::starting_at(0)),
        }
    }

    /// Authenticate an email/password pair.
    ///
    /// The two hardcoded identities are checked first; otherwise the
    /// persisted user list is scanned for an exact email + plaintext
    /// password match (self-registered accounts always carry the `user`
    /// role).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when nothing matches.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.emulate_latency().await;

        if let Some(identity) = hardcoded_identity(email, password)? {
            debug!(role = %identity.role, "hardcoded identity matched");
            return Ok(identity);
        }

        let users = self.load_users()?;
        let user = users
            .iter()
            .find(|u| u.email.as_str() == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        debug!(user_id = %user.id, "registered user matched");
        Ok(user.identity())
    }

    /// Register a new account with the default `user` role and return its
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserExists`] if the email is already present
    /// and [`AuthError::InvalidEmail`] if it does not parse.
    #[instrument(skip(self, password, name), fields(email = %email))]
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Identity, AuthError> {
        self.emulate_latency().await;

        let email = Email::parse(email)?;
        let mut users = self.load_users()?;

        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::UserExists);
        }

        let user = StoredUser {
            id: UserId::new(self.ids.next()),
            email,
            password: password.to_owned(),
            name: name.to_owned(),
            role: Role::User,
        };
        users.push(user.clone());
        self.kv.put(USERS_KEY, &users)?;

        debug!(user_id = %user.id, "user registered");
        Ok(user.identity())
    }

    fn load_users(&self) -> Result<Vec<StoredUser>, AuthError> {
        Ok(self.kv.get::<Vec<StoredUser>>(USERS_KEY)?.unwrap_or_default())
    }

    async fn emulate_latency(&self) {
        if let Some(delay) = self.latency {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Check the two fixed demo accounts.
fn hardcoded_identity(email: &str, password: &str) -> Result<Option<Identity>, AuthError> {
    let (identity, role) = if (email, password) == (DEMO_ADMIN.0, DEMO_ADMIN.1) {
        ((1, DEMO_ADMIN.0, DEMO_ADMIN.2), Role::Admin)
    } else if (email, password) == (DEMO_USER.0, DEMO_USER.1) {
        ((2, DEMO_USER.0, DEMO_USER.2), Role::User)
    } else {
        return Ok(None);
    };

    let (id, email, name) = identity;
    Ok(Some(Identity {
        id: UserId::new(id),
        email: Email::parse(email)?,
        name: name.to_owned(),
        role,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(dir: &std::path::Path) -> AuthService {
        AuthService::new(KvStore::open(dir).unwrap(), None)
    }

    #[tokio::test]
    async fn test_hardcoded_admin_login() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());
        let identity = auth.login("admin@store.com", "admin123").await.unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.name, "Admin User");
    }

    #[tokio::test]
    async fn test_hardcoded_user_login() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());
        let identity = auth.login("user@store.com", "user123").await.unwrap();
        assert_eq!(identity.role, Role::User);
    }

    #[tokio::test]
    async fn test_unknown_credentials_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());
        let err = auth.login("ghost@store.com", "nope").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_wrong_password_for_hardcoded_account() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());
        let err = auth.login("admin@store.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());

        let registered = auth
            .register("asha@example.com", "hunter2", "Asha")
            .await
            .unwrap();
        assert_eq!(registered.role, Role::User);

        let logged_in = auth.login("asha@example.com", "hunter2").await.unwrap();
        assert_eq!(logged_in, registered);
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());

        auth.register("asha@example.com", "hunter2", "Asha")
            .await
            .unwrap();
        let err = auth
            .register("asha@example.com", "other", "Asha Again")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserExists));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_on_register() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());
        let err = auth.register("not-an-email", "pw", "X").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }
}
