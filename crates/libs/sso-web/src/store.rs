//! Diesel-backed implementation of the storage capability traits.
//!
//! One concrete store satisfies all three interfaces the service depends
//! on, classifying database errors into the storage taxonomy the service
//! inspects.

use sso_models::app::app::App as AppRow;
use sso_models::db::connection::DbConnection;
use sso_models::user::user::{User as UserRow, UserCreate};
use sso_service::models::{App, User};
use sso_service::store::{AppProvider, StorageError, StorageResult, UserProvider, UserSaver};

use crate::prelude::W;

/// Storage backend over the PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DieselStore {
    db: DbConnection,
}

impl DieselStore {
    /// Wraps an established connection pool.
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

impl From<UserRow> for W<User> {
    fn from(value: UserRow) -> Self {
        Self(User {
            id: value.id,
            email: value.email,
            pass_hash: value.pass_hash,
            is_admin: value.is_admin,
        })
    }
}

impl From<AppRow> for W<App> {
    fn from(value: AppRow) -> Self {
        Self(App {
            id: value.id,
            name: value.name,
            secret: value.secret,
        })
    }
}

fn classify_user_error(err: sso_models::error::Error) -> StorageError {
    if err.is_not_found() {
        StorageError::UserNotFound
    } else if err.is_unique_violation() {
        StorageError::UserAlreadyExists
    } else {
        StorageError::Backend(Box::new(err))
    }
}

fn classify_app_error(err: sso_models::error::Error) -> StorageError {
    if err.is_not_found() {
        StorageError::AppNotFound
    } else {
        StorageError::Backend(Box::new(err))
    }
}

impl UserSaver for DieselStore {
    async fn save_user(&self, email: &str, pass_hash: &str) -> StorageResult<i64> {
        UserCreate::new(email.to_string(), pass_hash.to_string())
            .create(&self.db)
            .map(|user| user.id)
            .map_err(classify_user_error)
    }
}

impl UserProvider for DieselStore {
    async fn user_by_email(&self, email: &str) -> StorageResult<User> {
        UserRow::fetch_by_email(&self.db, email)
            .map(|row| W::<User>::from(row).0)
            .map_err(classify_user_error)
    }

    async fn is_admin(&self, user_id: i64) -> StorageResult<bool> {
        UserRow::fetch_by_id(&self.db, user_id)
            .map(|row| row.is_admin)
            .map_err(classify_user_error)
    }
}

impl AppProvider for DieselStore {
    async fn app_by_id(&self, app_id: i64) -> StorageResult<App> {
        AppRow::fetch_by_id(&self.db, app_id)
            .map(|row| W::<App>::from(row).0)
            .map_err(classify_app_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> sso_models::error::Error {
        sso_models::error::Error::Diesel(diesel::result::Error::NotFound)
    }

    fn unique_violation() -> sso_models::error::Error {
        sso_models::error::Error::Diesel(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new(String::from(
                "duplicate key value violates unique constraint \"users_email_key\"",
            )),
        ))
    }

    fn backend_failure() -> sso_models::error::Error {
        sso_models::error::Error::Diesel(diesel::result::Error::BrokenTransactionManager)
    }

    #[test]
    fn classifies_missing_user_rows() {
        assert!(matches!(
            classify_user_error(not_found()),
            StorageError::UserNotFound
        ));
    }

    #[test]
    fn classifies_duplicate_email() {
        assert!(matches!(
            classify_user_error(unique_violation()),
            StorageError::UserAlreadyExists
        ));
    }

    #[test]
    fn classifies_missing_app_rows() {
        assert!(matches!(
            classify_app_error(not_found()),
            StorageError::AppNotFound
        ));
    }

    #[test]
    fn other_database_failures_stay_backend_errors() {
        assert!(matches!(
            classify_user_error(backend_failure()),
            StorageError::Backend(_)
        ));
        assert!(matches!(
            classify_app_error(backend_failure()),
            StorageError::Backend(_)
        ));
    }
}
