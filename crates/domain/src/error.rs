//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A login credential failed format validation.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A required field is missing or empty.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A quantity is zero or otherwise out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A query carries an unusable page or page size.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
