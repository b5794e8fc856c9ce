//! Authentication response structure.
//!
//! Standard response format for issued access tokens.

use serde::{Deserialize, Serialize};

use super::TOKEN_TYPE;

/// Authentication response with access token.
///
/// # JSON Format
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "Bearer"
/// }
/// ```
#[derive(Debug, Deserialize, Serialize)]
pub struct AuthBody {
    /// The access token.
    pub access_token: String,
    /// The token type (always "Bearer").
    pub token_type: String,
}

impl AuthBody {
    /// Wraps a signed token in the standard response format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sso_auth::auth_body::AuthBody;
    ///
    /// let body = AuthBody::new("some_token".to_string());
    /// assert_eq!(body.token_type, "Bearer");
    /// ```
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: String::from(TOKEN_TYPE),
        }
    }
}
