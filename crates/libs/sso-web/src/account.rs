//! Account operations exposed over the wire.
//!
//! Thin bridges between wire payloads and the domain service: presence
//! validation happens here, policy stays in the service.

use serde::{Deserialize, Serialize};
use sso_auth::auth_body::AuthBody;
use sso_service::auth::Auth;
use sso_service::store::{AppProvider, UserProvider, UserSaver};

use crate::prelude::*;
use crate::store::DieselStore;

/// The authentication service wired to the Diesel-backed store.
pub type SsoAuth = Auth<DieselStore, DieselStore, DieselStore>;

#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub app_id: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct IsAdminRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

/// Registers a new user account.
pub async fn register<S, P, A>(
    auth: &Auth<S, P, A>,
    payload: RegisterRequest,
) -> Result<RegisterResponse>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(Error::MissingCredentials);
    }

    let user_id = auth.register(&payload.email, &payload.password).await?;
    Ok(RegisterResponse { user_id })
}

/// Verifies credentials and returns a bearer token scoped to the requesting
/// application.
pub async fn login<S, P, A>(auth: &Auth<S, P, A>, payload: LoginRequest) -> Result<AuthBody>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(Error::MissingCredentials);
    }

    let token = auth
        .login(&payload.email, &payload.password, payload.app_id)
        .await?;
    Ok(AuthBody::new(token))
}

/// Reports whether the given user holds the administrative role.
pub async fn is_admin<S, P, A>(
    auth: &Auth<S, P, A>,
    payload: IsAdminRequest,
) -> Result<IsAdminResponse>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    let is_admin = auth.is_admin(payload.user_id).await?;
    Ok(IsAdminResponse { is_admin })
}
