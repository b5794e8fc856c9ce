//! Domain models, independent of any storage backend.

/// A registered user account as seen by the authentication domain.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Stable identifier assigned by storage.
    pub id: i64,
    /// Login email, unique across all users.
    pub email: String,
    /// Self-contained password hash. Never logged, never handed to callers.
    pub pass_hash: String,
    /// Whether this user holds the administrative role.
    pub is_admin: bool,
}

/// A tenant application registered to receive tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    /// Application identifier, assigned when the tenant is provisioned.
    pub id: i64,
    /// Human-readable application name.
    pub name: String,
    /// Per-tenant token signing secret.
    pub secret: String,
}
