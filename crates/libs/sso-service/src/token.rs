//! Access token claims and issuance.

use chrono::{TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use sso_auth::jwt::sign_claims;

use crate::models::{App, User};
use crate::prelude::*;

/// Claims carried by an issued access token.
///
/// Exactly three claims: subject id, subject email, expiry. Tokens carry no
/// role claim; administrative state is always resolved against storage so it
/// cannot go stale inside a token's lifetime.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject user id.
    pub uid: i64,
    /// Subject login email.
    pub email: String,
    /// Expiry as a unix timestamp, issuance time plus the configured TTL.
    pub exp: i64,
}

impl AccessClaims {
    /// Builds the claim set for a verified user with expiry `now + ttl`.
    pub fn new(user: &User, ttl: TimeDelta) -> Result<Self> {
        let expiration = Utc::now()
            .checked_add_signed(ttl)
            .ok_or(Error::TokenCreation)?;

        Ok(Self {
            uid: user.id,
            email: user.email.clone(),
            exp: expiration.timestamp(),
        })
    }
}

/// Mints a signed access token for `user`, keyed by `app`'s secret.
///
/// A signing failure is fatal to the login that requested it; an unusable
/// tenant secret will not become valid on retry.
pub fn issue_token(user: &User, app: &App, ttl: TimeDelta) -> Result<String> {
    let claims = AccessClaims::new(user, ttl)?;
    Ok(sign_claims(&claims, app.secret.as_bytes())?)
}
