//! Domain service error taxonomy.

use crate::store::StorageError;

/// Errors surfaced by the authentication service.
///
/// Unknown email and password mismatch both map to
/// [`Error::InvalidCredentials`] so an unauthenticated caller cannot probe
/// which accounts exist. Tenant resolution failures stay distinguishable:
/// the application id is not secret material.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown email or password mismatch during login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The requested application id is not a registered tenant.
    #[error("Unknown application {0}")]
    UnknownApp(i64),

    /// Token expiry fell outside the representable time range.
    #[error("Access token creation")]
    TokenCreation,

    /// Hashing or signing primitive failure. `PasswordHash` is fatal to the
    /// register call that triggered it, `Jwt` to the login call; neither is
    /// retried.
    #[error(transparent)]
    Auth(#[from] sso_auth::error::Error),

    /// Collaborator-store failure, propagated with its classification
    /// intact.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
