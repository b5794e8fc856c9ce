//! User account model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::users::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Deserialize;

/// A registered user account.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user ID, assigned by the database.
    pub id: i64,
    /// Login email, unique across all users.
    pub email: String,
    /// Self-contained password hash. Never logged, never sent to callers.
    pub pass_hash: String,
    /// Whether this user holds the administrative role.
    pub is_admin: bool,
    /// When this account was created.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user account.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct UserCreate {
    /// Login email for the new account.
    pub email: String,
    /// Pre-hashed password.
    pub pass_hash: String,
}

impl UserCreate {
    /// Creates a new user creation request.
    pub fn new(user_email: String, user_pass_hash: String) -> Self {
        Self {
            email: user_email,
            pass_hash: user_pass_hash,
        }
    }

    /// Inserts the user, returning the stored row.
    ///
    /// The `users.email` unique constraint rejects duplicate registrations;
    /// the resulting error reports `is_unique_violation()`.
    pub fn create(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(users)
            .values(self)
            .returning(User::as_returning())
            .get_result(conn)?)
    }
}

impl User {
    /// Fetches a user by login email.
    pub fn fetch_by_email(connection: &DbConnection, target: &str) -> Result<Self> {
        let conn = &mut connection.pool.get()?;

        Ok(User::by_email(target)
            .select(User::as_select())
            .get_result(conn)?)
    }

    /// Fetches a user by ID.
    pub fn fetch_by_id(connection: &DbConnection, target: i64) -> Result<Self> {
        let conn = &mut connection.pool.get()?;

        Ok(users
            .filter(id.eq(target))
            .select(User::as_select())
            .get_result(conn)?)
    }

    /// Returns a query filtered by login email.
    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_email(target: &str) -> _ {
        crate::schema::users::dsl::users.filter(email.eq(target))
    }
}
