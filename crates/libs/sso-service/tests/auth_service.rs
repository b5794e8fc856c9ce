use std::sync::{Arc, Mutex};

use chrono::{TimeDelta, Utc};
use sso_auth::jwt::verify_token;
use sso_service::auth::Auth;
use sso_service::error::Error;
use sso_service::models::{App, User};
use sso_service::store::{AppProvider, StorageError, StorageResult, UserProvider, UserSaver};
use sso_service::token::AccessClaims;

const TOKEN_TTL: TimeDelta = TimeDelta::hours(1);

/// In-memory store backing all three capability traits, the way the
/// production Diesel store does. Ids are assigned sequentially from 1.
#[derive(Clone, Default)]
struct MemStore {
    inner: Arc<Mutex<MemStoreInner>>,
}

#[derive(Default)]
struct MemStoreInner {
    users: Vec<User>,
    apps: Vec<App>,
}

impl MemStore {
    fn with_apps(apps: Vec<App>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemStoreInner {
                users: Vec::new(),
                apps,
            })),
        }
    }

    fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

impl UserSaver for MemStore {
    async fn save_user(&self, email: &str, pass_hash: &str) -> StorageResult<i64> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|user| user.email == email) {
            return Err(StorageError::UserAlreadyExists);
        }
        let id = inner.users.len() as i64 + 1;
        inner.users.push(User {
            id,
            email: email.to_string(),
            pass_hash: pass_hash.to_string(),
            is_admin: false,
        });
        Ok(id)
    }
}

impl UserProvider for MemStore {
    async fn user_by_email(&self, email: &str) -> StorageResult<User> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
            .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: i64) -> StorageResult<bool> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.is_admin)
            .ok_or(StorageError::UserNotFound)
    }
}

impl AppProvider for MemStore {
    async fn app_by_id(&self, app_id: i64) -> StorageResult<App> {
        let inner = self.inner.lock().unwrap();
        inner
            .apps
            .iter()
            .find(|app| app.id == app_id)
            .cloned()
            .ok_or(StorageError::AppNotFound)
    }
}

fn test_app(id: i64, secret: &str) -> App {
    App {
        id,
        name: format!("app-{id}"),
        secret: secret.to_string(),
    }
}

fn auth_with_apps(apps: Vec<App>) -> (Auth<MemStore, MemStore, MemStore>, MemStore) {
    let store = MemStore::with_apps(apps);
    let auth = Auth::new(store.clone(), store.clone(), store.clone(), TOKEN_TTL);
    (auth, store)
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let (auth, _store) = auth_with_apps(vec![test_app(7, "secret-7")]);
    auth.register("a@x.com", "secret1").await.unwrap();

    let unknown_email = auth.login("missing@x.com", "secret1", 7).await.unwrap_err();
    let wrong_password = auth.login("a@x.com", "wrong", 7).await.unwrap_err();

    assert!(matches!(unknown_email, Error::InvalidCredentials));
    assert!(matches!(wrong_password, Error::InvalidCredentials));
}

#[tokio::test]
async fn issued_token_carries_subject_and_expiry() {
    let (auth, _store) = auth_with_apps(vec![test_app(7, "secret-7")]);
    let user_id = auth.register("a@x.com", "secret1").await.unwrap();

    let before = Utc::now().timestamp();
    let token = auth.login("a@x.com", "secret1", 7).await.unwrap();
    let after = Utc::now().timestamp();

    let claims = verify_token::<AccessClaims>(&token, b"secret-7")
        .unwrap()
        .claims;
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.email, "a@x.com");
    assert!(claims.exp >= before + TOKEN_TTL.num_seconds());
    assert!(claims.exp <= after + TOKEN_TTL.num_seconds());
}

#[tokio::test]
async fn tokens_are_not_valid_across_tenants() {
    let (auth, _store) = auth_with_apps(vec![test_app(1, "secret-one"), test_app(2, "secret-two")]);
    auth.register("a@x.com", "secret1").await.unwrap();

    let token_one = auth.login("a@x.com", "secret1", 1).await.unwrap();
    let token_two = auth.login("a@x.com", "secret1", 2).await.unwrap();

    assert!(verify_token::<AccessClaims>(&token_one, b"secret-one").is_ok());
    assert!(verify_token::<AccessClaims>(&token_two, b"secret-two").is_ok());
    assert!(verify_token::<AccessClaims>(&token_one, b"secret-two").is_err());
    assert!(verify_token::<AccessClaims>(&token_two, b"secret-one").is_err());
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let (auth, store) = auth_with_apps(Vec::new());
    auth.register("a@x.com", "secret1").await.unwrap();

    let err = auth.register("a@x.com", "secret2").await.unwrap_err();

    assert!(matches!(
        err,
        Error::Storage(StorageError::UserAlreadyExists)
    ));
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn fresh_user_is_not_admin_and_unknown_id_is_an_error() {
    let (auth, _store) = auth_with_apps(Vec::new());
    let user_id = auth.register("a@x.com", "secret1").await.unwrap();

    assert!(!auth.is_admin(user_id).await.unwrap());

    let err = auth.is_admin(999).await.unwrap_err();
    assert!(matches!(err, Error::Storage(StorageError::UserNotFound)));
}

#[tokio::test]
async fn register_login_round_trip() {
    let (auth, _store) = auth_with_apps(vec![test_app(7, "secret-7")]);

    let user_id = auth.register("a@x.com", "secret1").await.unwrap();
    assert_eq!(user_id, 1);

    let token = auth.login("a@x.com", "secret1", 7).await.unwrap();
    let claims = verify_token::<AccessClaims>(&token, b"secret-7")
        .unwrap()
        .claims;
    assert_eq!(claims.uid, 1);

    let err = auth.login("a@x.com", "wrong", 7).await.unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));

    let err = auth.login("a@x.com", "secret1", 999).await.unwrap_err();
    assert!(matches!(err, Error::UnknownApp(999)));
}
