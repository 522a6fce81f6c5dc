//! Common error types for procmatch tooling.

use thiserror::Error;

/// Common error type for procmatch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Request document error
    #[error("invalid request: {0}")]
    Request(String),
}

/// Result type alias using procmatch Error.
pub type Result<T> = std::result::Result<T, Error>;
