//! Storage capability traits.
//!
//! The service reaches durable storage through three narrow interfaces, one
//! per capability it needs, so callers can back them with a single concrete
//! store in production and with minimal mocks in tests. All methods are
//! async: dropping an operation's future abandons the storage call along
//! with it, so an abandoned request stops consuming resources.

use std::future::Future;

use crate::models::{App, User};

/// Errors raised by storage collaborators.
///
/// Classification happens in the storage adapter; the service only inspects
/// the kind. Anything without intended-semantics meaning lands in
/// [`StorageError::Backend`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No user record exists for the given email or id.
    #[error("user not found")]
    UserNotFound,

    /// A user record with the given email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// No application is registered under the given id.
    #[error("app not found")]
    AppNotFound,

    /// Any other collaborator failure: I/O, timeout, pool exhaustion.
    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Storage result type.
pub type StorageResult<T> = core::result::Result<T, StorageError>;

/// Persists new user records.
pub trait UserSaver {
    /// Stores `{email, pass_hash}` and returns the storage-assigned id.
    ///
    /// Email uniqueness is enforced here, not by the caller; a duplicate
    /// registration fails with [`StorageError::UserAlreadyExists`].
    fn save_user(
        &self,
        email: &str,
        pass_hash: &str,
    ) -> impl Future<Output = StorageResult<i64>> + Send;
}

/// Reads user records.
pub trait UserProvider {
    /// Looks up a user by login email.
    fn user_by_email(&self, email: &str) -> impl Future<Output = StorageResult<User>> + Send;

    /// Reports whether the user holds the administrative role.
    ///
    /// An unknown id is [`StorageError::UserNotFound`], never a silent
    /// `false`.
    fn is_admin(&self, user_id: i64) -> impl Future<Output = StorageResult<bool>> + Send;
}

/// Reads registered tenant applications.
pub trait AppProvider {
    /// Looks up an application by id.
    fn app_by_id(&self, app_id: i64) -> impl Future<Output = StorageResult<App>> + Send;
}
