//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported by the harness.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A request body could not be serialized to JSON.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A bearer credential was empty.
    #[error("credential must not be empty")]
    EmptyCredential,

    /// A query string could not be encoded.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
