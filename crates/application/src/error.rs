//! Application error types

use thiserror::Error;

use stockpile_domain::DomainError;

use crate::ports::{ApiError, StorageError};

/// Errors surfaced by the feature repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend rejected the supplied credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RepositoryError {
    /// Returns true when the failure means the session is gone and the
    /// caller must route to re-authentication.
    #[must_use]
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Api(ApiError::AuthExpired))
    }
}

/// Application-level errors returned by use cases.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
