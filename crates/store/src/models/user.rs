//! Demo user records and identities.
//!
//! DEMO ONLY: stored passwords are plaintext and live in the local
//! key-value store. There is no hashing, no session token, no expiry.
//! Nothing here may be carried into a production deployment.

use meteor_core::{Email, Role, UserId};
use serde::{Deserialize, Serialize};

/// A registered user as persisted in the local user list.
///
/// Internal to the auth service; the password never crosses the crate
/// boundary ([`Identity`] is the public shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: UserId,
    pub email: Email,
    /// Plaintext, demo-only.
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl StoredUser {
    /// The public identity for this user.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// An authenticated identity, held by the caller for the session's
/// lifetime. No token is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub role: Role,
}
