//! Authentication error types.

/// Errors raised by the hashing and signing primitives.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Token signing or verification failed.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or hash parsing failed.
    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}
