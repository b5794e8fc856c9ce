//! Daemon configuration.

use chrono::TimeDelta;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:44044";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;

/// Runtime configuration for the SSO daemon.
pub struct Config {
    /// Address the API server listens on.
    pub bind_addr: String,
    /// Lifetime of issued access tokens.
    pub token_ttl: TimeDelta,
}

impl Config {
    /// Create daemon configuration from environment variables.
    ///
    /// Reads `SSOD_BIND_ADDR` and `SSOD_TOKEN_TTL_SECONDS`, falling back to
    /// defaults when unset. A TTL that is set but not an integer is a
    /// configuration error and panics at startup.
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("SSOD_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let token_ttl = match std::env::var("SSOD_TOKEN_TTL_SECONDS") {
            Ok(raw) => TimeDelta::seconds(
                raw.parse()
                    .expect("SSOD_TOKEN_TTL_SECONDS must be an integer number of seconds"),
            ),
            Err(_) => TimeDelta::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        };

        Self {
            bind_addr,
            token_ttl,
        }
    }
}
