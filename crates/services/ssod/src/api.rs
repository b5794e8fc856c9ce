use axum::{Json, Router, extract::State, routing::post};
use sso_auth::auth_body::AuthBody;
use sso_web::account::{
    self, IsAdminRequest, IsAdminResponse, LoginRequest, RegisterRequest, RegisterResponse, SsoAuth,
};
use tokio::task::JoinHandle;

use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::prelude::*;
use sso_web::prelude::Result as SsoWebResult;

fn v1(path: &str) -> String {
    format!("/v1/{path}")
}

pub async fn setup_api(auth: SsoAuth, bind_addr: &str) -> Result<JoinHandle<Result<()>>> {
    let app = Router::new()
        .route(&v1("register"), post(register))
        .route(&v1("login"), post(login))
        .route(&v1("is_admin"), post(is_admin))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(auth);

    // run it with hyper
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await?;
        Ok(())
    });

    Ok(handle)
}

async fn register(
    State(auth): State<SsoAuth>,
    Json(payload): Json<RegisterRequest>,
) -> SsoWebResult<Json<RegisterResponse>> {
    Ok(Json(account::register(&auth, payload).await?))
}

async fn login(
    State(auth): State<SsoAuth>,
    Json(payload): Json<LoginRequest>,
) -> SsoWebResult<Json<AuthBody>> {
    Ok(Json(account::login(&auth, payload).await?))
}

async fn is_admin(
    State(auth): State<SsoAuth>,
    Json(payload): Json<IsAdminRequest>,
) -> SsoWebResult<Json<IsAdminResponse>> {
    Ok(Json(account::is_admin(&auth, payload).await?))
}
