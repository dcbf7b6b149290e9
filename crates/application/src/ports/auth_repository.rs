//! Authentication repository port.

use async_trait::async_trait;

use stockpile_domain::{Credentials, TokenPair, User};

use crate::error::RepositoryError;

/// A successful login: the signed-in user plus the freshly issued tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Tokens issued for this session.
    pub tokens: TokenPair,
}

/// Port for the authentication backend.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Exchanges credentials for a user record and a token pair.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::InvalidCredentials`] when the backend
    /// rejects the credentials, or an API error otherwise.
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, RepositoryError>;

    /// Invalidates the session server-side. Local state is cleared by the
    /// session coordinator regardless of the outcome here.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backend call fails.
    async fn logout(&self) -> Result<(), RepositoryError>;

    /// Fetches the profile of the currently authenticated user, used to
    /// validate a restored session against the server.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backend call fails; an auth-expired
    /// outcome means the restored session is stale.
    async fn current_user(&self) -> Result<User, RepositoryError>;
}
