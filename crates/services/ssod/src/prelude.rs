//! Common types and utilities.

/// Daemon error type.
pub use crate::error::Error;

/// Daemon result type.
pub type Result<T> = core::result::Result<T, Error>;
