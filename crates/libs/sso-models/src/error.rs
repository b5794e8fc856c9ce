//! Database error types.

use diesel::result::DatabaseErrorKind;

/// Database operation errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Database connection pool error.
    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    /// Diesel ORM operation error.
    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),
}

impl Error {
    /// Whether this error means the requested row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Diesel(diesel::result::Error::NotFound))
    }

    /// Whether this error was raised by a unique constraint, e.g. inserting
    /// a second user with the same email.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Error::Diesel(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            ))
        )
    }
}
