//! Tenant-keyed JWT signing and verification.
//!
//! Every registered application holds its own signing secret, so the key is
//! supplied per call rather than read from process configuration. Tokens are
//! signed with HS256; a token minted for one application never verifies
//! against another application's secret.
//!
//! # Examples
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use sso_auth::jwt::{sign_claims, verify_token};
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct Claims {
//!     uid: i64,
//!     email: String,
//!     exp: i64,
//! }
//!
//! let claims = Claims {
//!     uid: 1,
//!     email: "a@x.com".to_string(),
//!     exp: 4118335200,
//! };
//!
//! let token = sign_claims(&claims, b"tenant-secret").unwrap();
//! let decoded = verify_token::<Claims>(&token, b"tenant-secret").unwrap();
//! assert_eq!(claims, decoded.claims);
//!
//! // The wrong tenant secret fails verification.
//! assert!(verify_token::<Claims>(&token, b"other-secret").is_err());
//! ```

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::prelude::*;

/// Signing algorithm used for every issued token.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Signs the provided claims into a JWT using the given secret.
///
/// Claims are signed for integrity, not encrypted; include an `exp` claim so
/// the token terminates on its own.
pub fn sign_claims<T>(claims: &T, secret: &[u8]) -> Result<String>
where
    T: Serialize,
{
    let header = Header::new(ALGORITHM);
    Ok(encode(&header, claims, &EncodingKey::from_secret(secret))?)
}

/// Verifies a token's signature and expiry, returning the decoded claims.
///
/// Only tokens signed with `secret` and the expected algorithm are accepted;
/// expired tokens are rejected during validation.
pub fn verify_token<T>(token: &str, secret: &[u8]) -> Result<TokenData<T>>
where
    T: DeserializeOwned,
{
    Ok(decode(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::new(ALGORITHM),
    )?)
}
