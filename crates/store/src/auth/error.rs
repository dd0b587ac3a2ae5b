//! Authentication error types.

use thiserror::Error;

use crate::error::StoreError;

/// Errors produced by the demo authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No identity matches the supplied email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email is already registered.
    #[error("user already exists")]
    UserExists,

    /// The supplied email is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] meteor_core::EmailError),

    /// The user list could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}
