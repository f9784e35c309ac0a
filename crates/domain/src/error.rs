//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timeout is not usable.
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
