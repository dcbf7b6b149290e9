//! Authentication types: users, credentials, and token pairs.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Minimum accepted username length.
const MIN_USERNAME_LEN: usize = 3;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[a-zA-Z0-9_.\-]+$").unwrap()
});

/// An authenticated user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Granted permission strings.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl User {
    /// Returns true if the user holds the given permission.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// An access/refresh token pair issued by the backend.
///
/// Owned by the token store: written on login and on successful refresh,
/// erased on logout or refresh failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived bearer credential sent with each authenticated request.
    pub access_token: String,
    /// Longer-lived credential exchanged for a new access token.
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a token pair.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Returns the Authorization header value for the access token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Login credentials entered by the user.
///
/// The identifier doubles as email or username: anything containing `@`
/// is validated as an email address, everything else as a username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address or username.
    pub identifier: String,
    /// Plain-text password, only ever sent to the login endpoint.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from an identifier and password.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Validates credential formats before any network call.
    ///
    /// This mirrors the server's own checks so obviously broken input
    /// never leaves the device. The server remains the source of truth.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCredentials`] describing the first
    /// failed check.
    pub fn validate(&self) -> DomainResult<()> {
        if self.identifier.is_empty() {
            return Err(DomainError::InvalidCredentials(
                "email or username is required".to_string(),
            ));
        }

        if self.identifier.contains('@') {
            if !EMAIL_RE.is_match(&self.identifier) {
                return Err(DomainError::InvalidCredentials(
                    "invalid email format".to_string(),
                ));
            }
        } else {
            if self.identifier.len() < MIN_USERNAME_LEN {
                return Err(DomainError::InvalidCredentials(format!(
                    "username must be at least {MIN_USERNAME_LEN} characters"
                )));
            }
            if !USERNAME_RE.is_match(&self.identifier) {
                return Err(DomainError::InvalidCredentials(
                    "username contains invalid characters".to_string(),
                ));
            }
        }

        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::InvalidCredentials(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(())
    }
}
