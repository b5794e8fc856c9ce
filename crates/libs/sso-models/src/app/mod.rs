//! Tenant application models.
//!
//! This module contains data models for the applications registered to
//! consume the identity service. Rows are provisioned out-of-band; this
//! crate only reads them.

pub mod app;
