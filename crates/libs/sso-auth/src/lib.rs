//! Authentication primitives for the SSO backend.
//!
//! Provides the two cryptographic building blocks every identity operation
//! rests on: one-way password hashing with Argon2 and HS256 token signing
//! keyed by a tenant application's secret.

pub mod auth_body;
pub mod error;
pub mod jwt;
pub mod prelude;
pub mod secret_hash;

/// Token type reported alongside every issued access token.
pub const TOKEN_TYPE: &str = "Bearer";
