//! Tenant application model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::apps::dsl::*};
use diesel::prelude::*;

/// A tenant application registered to receive tokens.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::apps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct App {
    /// Application ID, assigned when the tenant is provisioned.
    pub id: i64,
    /// Human-readable application name.
    pub name: String,
    /// Per-tenant token signing secret.
    pub secret: String,
}

impl App {
    /// Fetches an application by ID.
    pub fn fetch_by_id(connection: &DbConnection, target: i64) -> Result<Self> {
        let conn = &mut connection.pool.get()?;

        Ok(apps
            .filter(id.eq(target))
            .select(App::as_select())
            .get_result(conn)?)
    }
}
