//! Session coordinator.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use stockpile_domain::{Credentials, DomainError, SessionState, User};

use crate::error::RepositoryError;
use crate::ports::{AuthRepository, LoginOutcome, TokenStore, UserStore};
use crate::use_cases::{Login, Logout};

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Credentials failed local format validation; no network call was
    /// made.
    #[error("validation failed: {0}")]
    Validation(#[from] DomainError),

    /// The authentication backend rejected the operation.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SessionError {
    /// Returns true when the failure means the session is gone.
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_auth_expired())
    }
}

/// Tunable session restore behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionPolicy {
    /// When true, [`SessionManager::restore`] confirms a restored session
    /// against the server before reporting it authenticated. When false
    /// a persisted user record is trusted as-is; an expired token then
    /// surfaces on the first API call through the refresh/expire path.
    pub validate_on_restore: bool,
}

/// Owns the observable session state and the token/user persistence.
///
/// The store handle is injected explicitly and shared with the API
/// client, so both see the same token pair without any ambient global.
pub struct SessionManager<A, S> {
    auth: A,
    login: Login<A>,
    logout: Logout<A>,
    store: Arc<S>,
    policy: SessionPolicy,
    state: watch::Sender<SessionState>,
}

impl<A, S> SessionManager<A, S>
where
    A: AuthRepository + Clone,
    S: TokenStore + UserStore,
{
    /// Creates a coordinator with the default policy.
    #[must_use]
    pub fn new(auth: A, store: Arc<S>) -> Self {
        Self::with_policy(auth, store, SessionPolicy::default())
    }

    /// Creates a coordinator with an explicit restore policy.
    #[must_use]
    pub fn with_policy(auth: A, store: Arc<S>, policy: SessionPolicy) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            login: Login::new(auth.clone()),
            logout: Logout::new(auth.clone()),
            auth,
            store,
            policy,
            state,
        }
    }

    /// Subscribes to session state changes. The receiver immediately
    /// holds the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Validates and submits credentials, persisting the issued tokens
    /// and user record on success.
    ///
    /// Persistence failures are logged and do not fail the login; the
    /// session is still usable for its lifetime, it just won't survive a
    /// restart.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] before any network call when
    /// the credential format is unusable, or the repository failure
    /// otherwise. The state is `Anonymous` after any failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, SessionError> {
        self.state.send_replace(SessionState::Authenticating);

        let LoginOutcome { user, tokens } = match self.login.execute(credentials).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.state.send_replace(SessionState::Anonymous);
                return Err(e);
            }
        };

        if let Err(e) = self
            .store
            .store_tokens(&tokens.access_token, &tokens.refresh_token)
            .await
        {
            tracing::warn!(error = %e, "failed to persist session tokens");
        }
        if let Err(e) = self.store.store_user(&user).await {
            tracing::warn!(error = %e, "failed to persist user record");
        }

        self.state
            .send_replace(SessionState::Authenticated { user: user.clone() });
        Ok(user)
    }

    /// Ends the session. The server-side call is best-effort; local
    /// tokens and the user record are cleared unconditionally.
    pub async fn logout(&self) {
        if let Err(e) = self.logout.execute().await {
            tracing::warn!(error = %e, "logout call failed, clearing local session anyway");
        }
        self.store.clear_tokens().await;
        self.store.clear_user().await;
        self.state.send_replace(SessionState::Anonymous);
    }

    /// Attempts to restore a session from the persisted user record.
    ///
    /// Returns true when the session is authenticated afterwards. With
    /// `validate_on_restore` set, the record is confirmed against the
    /// server: an auth-expired answer clears the session, while a plain
    /// transport failure keeps the cached user (optimistic, corrected by
    /// the first failing API call).
    pub async fn restore(&self) -> bool {
        let Some(cached) = self.store.load_user().await else {
            self.state.send_replace(SessionState::Anonymous);
            return false;
        };

        if !self.policy.validate_on_restore {
            self.state
                .send_replace(SessionState::Authenticated { user: cached });
            return true;
        }

        match self.auth.current_user().await {
            Ok(user) => {
                if let Err(e) = self.store.store_user(&user).await {
                    tracing::warn!(error = %e, "failed to refresh persisted user record");
                }
                self.state
                    .send_replace(SessionState::Authenticated { user });
                true
            }
            Err(e) if e.is_auth_expired() => {
                tracing::debug!("restored session is stale, clearing");
                self.store.clear_tokens().await;
                self.store.clear_user().await;
                self.state.send_replace(SessionState::Anonymous);
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "session validation unreachable, keeping cached user");
                self.state
                    .send_replace(SessionState::Authenticated { user: cached });
                true
            }
        }
    }
}
