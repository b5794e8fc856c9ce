//! Password hashing and verification using Argon2.
//!
//! Hashes embed their own salt and parameters, so the produced string is the
//! only thing that needs to be stored. Verification recomputes from those
//! embedded parameters and compares in constant time.
//!
//! # Examples
//!
//! ```rust
//! use sso_auth::secret_hash::{hash_password, verify_password};
//!
//! let hash = hash_password("secret1").unwrap();
//! assert!(verify_password("secret1", &hash).unwrap());
//! assert!(!verify_password("wrong", &hash).unwrap());
//!
//! // A fresh salt is drawn per call, so the same password never hashes twice
//! // to the same string while both outputs still verify.
//! let other = hash_password("secret1").unwrap();
//! assert_ne!(hash, other);
//! assert!(verify_password("secret1", &other).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Hashes a password with a freshly generated random salt.
///
/// Returns a self-contained PHC string (salt + parameters + digest) ready
/// for storage.
///
/// # Errors
///
/// Fails only when the hashing primitive itself cannot complete; a failure
/// here is fatal to the operation that requested the hash.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// A mismatch is a normal `Ok(false)`, never an error. An error means the
/// stored hash could not be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &hash.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}
