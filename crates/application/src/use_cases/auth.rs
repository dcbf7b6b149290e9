//! Authentication use cases.

use stockpile_domain::Credentials;

use crate::ports::{AuthRepository, LoginOutcome};
use crate::session::SessionError;

/// Validates credentials locally, then exchanges them for a session.
pub struct Login<A> {
    auth: A,
}

impl<A: AuthRepository> Login<A> {
    /// Creates the use case.
    #[must_use]
    pub const fn new(auth: A) -> Self {
        Self { auth }
    }

    /// Runs the login flow.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] before any network call when
    /// the credential format is unusable, or the repository failure
    /// otherwise.
    pub async fn execute(&self, credentials: &Credentials) -> Result<LoginOutcome, SessionError> {
        credentials.validate()?;
        Ok(self.auth.login(credentials).await?)
    }
}

/// Invalidates the session server-side.
pub struct Logout<A> {
    auth: A,
}

impl<A: AuthRepository> Logout<A> {
    /// Creates the use case.
    #[must_use]
    pub const fn new(auth: A) -> Self {
        Self { auth }
    }

    /// Runs the logout call.
    ///
    /// # Errors
    ///
    /// Returns the repository failure; callers clear local state
    /// regardless.
    pub async fn execute(&self) -> Result<(), SessionError> {
        Ok(self.auth.logout().await?)
    }
}
