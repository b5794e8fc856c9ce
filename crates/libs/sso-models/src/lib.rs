//! Database models and ORM layer for the SSO backend.
//!
//! Provides Diesel-based models, queries, and connection management for the
//! two persistent entities: user accounts and registered tenant
//! applications.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sso_models::{
//!     db::{config::DbConfig, connection::DbConnection},
//!     user::user::User,
//! };
//!
//! let config = DbConfig::from_env();
//! let db = DbConnection::new(&config).setup();
//!
//! let user = User::fetch_by_email(&db, "a@x.com").unwrap();
//! println!("user {} is_admin={}", user.id, user.is_admin);
//! ```

pub mod app;
pub mod db;
pub mod error;
pub mod prelude;
mod schema;
pub mod user;
