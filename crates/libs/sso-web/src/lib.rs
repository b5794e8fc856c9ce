//! Web transport glue for the SSO backend.
//!
//! Marshals wire payloads into domain service calls and maps the service's
//! typed errors onto HTTP statuses. Also hosts the Diesel-backed
//! implementation of the service's storage capability traits.

pub mod account;
pub mod error;
pub mod prelude;
pub mod store;
