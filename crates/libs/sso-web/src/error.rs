//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sso_service::store::StorageError;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Service(#[from] sso_service::error::Error),

    /* Api Errors */
    #[error("Missing credentials")]
    MissingCredentials,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, message) = match self {
            Error::MissingCredentials => (StatusCode::BAD_REQUEST, "Missing credentials"),
            Error::Service(err) => match err {
                sso_service::error::Error::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "Invalid credentials")
                }
                sso_service::error::Error::UnknownApp(_) => {
                    (StatusCode::NOT_FOUND, "Unknown application")
                }
                sso_service::error::Error::Storage(StorageError::UserAlreadyExists) => {
                    (StatusCode::CONFLICT, "Email already registered")
                }
                sso_service::error::Error::Storage(StorageError::UserNotFound) => {
                    (StatusCode::NOT_FOUND, "User not found")
                }
                sso_service::error::Error::Storage(_)
                | sso_service::error::Error::TokenCreation
                | sso_service::error::Error::Auth(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
            },
            Error::IO(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}
