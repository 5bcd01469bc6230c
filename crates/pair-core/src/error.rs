//! Error types for matter2mqtt-pair

use thiserror::Error;

/// Main error type for pairing-service operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read devices registry: {0}")]
    ReadRegistry(String),

    #[error("Failed to parse devices registry: {0}")]
    ParseRegistry(String),

    #[error("Failed to write devices registry: {0}")]
    WriteRegistry(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Commissioning failed: {0}")]
    Commissioning(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a registry read error
    pub fn read_registry(msg: impl Into<String>) -> Self {
        Error::ReadRegistry(msg.into())
    }

    /// Create a registry parse error
    pub fn parse_registry(msg: impl Into<String>) -> Self {
        Error::ParseRegistry(msg.into())
    }

    /// Create a registry write error
    pub fn write_registry(msg: impl Into<String>) -> Self {
        Error::WriteRegistry(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create a commissioning error
    pub fn commissioning(msg: impl Into<String>) -> Self {
        Error::Commissioning(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err.to_string())
    }
}
