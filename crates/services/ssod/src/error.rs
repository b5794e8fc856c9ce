//! Error types for the SSO daemon.

/// Errors that can occur while bootstrapping or serving.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
