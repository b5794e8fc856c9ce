//! Common types and utilities.

/// Domain service error type.
pub use crate::error::Error;

/// Domain service result type.
pub type Result<T> = core::result::Result<T, Error>;
