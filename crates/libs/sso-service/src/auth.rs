//! The authentication service.

use chrono::TimeDelta;
use sso_auth::secret_hash::{hash_password, verify_password};
use tracing::{info, warn};

use crate::prelude::*;
use crate::store::{AppProvider, StorageError, UserProvider, UserSaver};
use crate::token::issue_token;

/// Orchestrates credential verification, registration, token issuance, and
/// role queries.
///
/// Holds no mutable state across calls: the collaborator handles and token
/// TTL are fixed at construction, so concurrent operations are independent.
#[derive(Clone)]
pub struct Auth<S, P, A> {
    user_saver: S,
    user_provider: P,
    app_provider: A,
    token_ttl: TimeDelta,
}

impl<S, P, A> Auth<S, P, A>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    /// Creates the service over its storage collaborators.
    ///
    /// In production all three are typically the same backing store.
    pub fn new(user_saver: S, user_provider: P, app_provider: A, token_ttl: TimeDelta) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            token_ttl,
        }
    }

    /// Registers a new user, returning the storage-assigned id.
    ///
    /// The password is hashed with a fresh random salt before it reaches
    /// storage. Storage errors propagate unchanged; in particular a
    /// duplicate email surfaces as
    /// [`StorageError::UserAlreadyExists`](crate::store::StorageError).
    pub async fn register(&self, email: &str, password: &str) -> Result<i64> {
        info!(email, "registering new user");

        let pass_hash = hash_password(password)?;
        let user_id = self.user_saver.save_user(email, &pass_hash).await?;

        info!(email, user_id, "user registered");
        Ok(user_id)
    }

    /// Verifies credentials and mints an access token scoped to `app_id`.
    ///
    /// An unknown email and a password mismatch fail with the same
    /// [`Error::InvalidCredentials`]; an unknown application id fails with
    /// the distinguishable [`Error::UnknownApp`]. Each call is independent:
    /// there is no attempt counting and no lockout.
    pub async fn login(&self, email: &str, password: &str, app_id: i64) -> Result<String> {
        info!(email, app_id, "logging in user");

        let user = match self.user_provider.user_by_email(email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                warn!(email, "user not found");
                return Err(Error::InvalidCredentials);
            }
            Err(err) => return Err(err.into()),
        };

        if !verify_password(password, &user.pass_hash)? {
            info!(email, "invalid password");
            return Err(Error::InvalidCredentials);
        }

        let app = match self.app_provider.app_by_id(app_id).await {
            Ok(app) => app,
            Err(StorageError::AppNotFound) => {
                warn!(app_id, "unknown application");
                return Err(Error::UnknownApp(app_id));
            }
            Err(err) => return Err(err.into()),
        };

        let token = issue_token(&user, &app, self.token_ttl)?;

        info!(email, user_id = user.id, "user logged in");
        Ok(token)
    }

    /// Reports whether `user_id` holds the administrative role.
    ///
    /// Always a fresh storage lookup. Failures propagate as
    /// [`Error::Storage`]; an unknown id is an error, never `false`.
    pub async fn is_admin(&self, user_id: i64) -> Result<bool> {
        info!(user_id, "checking admin role");

        let is_admin = self.user_provider.is_admin(user_id).await?;

        info!(user_id, is_admin, "checked admin role");
        Ok(is_admin)
    }
}
