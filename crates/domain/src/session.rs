//! Session state for UI binding.
//!
//! A plain state enum published by the session coordinator, enabling
//! callers to route between login and authenticated surfaces without any
//! UI-framework coupling.

use serde::{Deserialize, Serialize};

use crate::auth::User;

/// Current authentication state of the device session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No session; callers should route to a login flow.
    #[default]
    Anonymous,

    /// A login attempt is in flight.
    Authenticating,

    /// A user is signed in.
    Authenticated {
        /// The signed-in user.
        user: User,
    },
}

impl SessionState {
    /// Returns true when a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns true while a login attempt is in flight.
    #[must_use]
    pub const fn is_authenticating(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "Demo".to_string(),
            email: "demo@example.com".to_string(),
            avatar: None,
            permissions: vec![],
        }
    }

    #[test]
    fn test_default_is_anonymous() {
        assert_eq!(SessionState::default(), SessionState::Anonymous);
        assert!(!SessionState::default().is_authenticated());
    }

    #[test]
    fn test_authenticated_exposes_user() {
        let state = SessionState::Authenticated { user: user() };
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("1"));
    }

    #[test]
    fn test_authenticating_is_not_authenticated() {
        let state = SessionState::Authenticating;
        assert!(state.is_authenticating());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }
}
