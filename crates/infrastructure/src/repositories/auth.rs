//! Authentication repository adapters.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stockpile_application::RepositoryError;
use stockpile_application::ports::{
    ApiClient, ApiError, AuthRepository, LoginOutcome, RequestConfig,
};
use stockpile_domain::{Credentials, TokenPair, User};

use crate::http::Envelope;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    // The backend accepts a username in this field too.
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    user: User,
    access_token: String,
    refresh_token: String,
}

/// [`AuthRepository`] backed by the HTTP API.
pub struct HttpAuthRepository<C> {
    api: Arc<C>,
}

impl<C> Clone for HttpAuthRepository<C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<C> HttpAuthRepository<C> {
    /// Creates the repository over a shared API client.
    #[must_use]
    pub const fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: ApiClient> AuthRepository for HttpAuthRepository<C> {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, RepositoryError> {
        let body = LoginRequest {
            email: &credentials.identifier,
            password: &credentials.password,
        };
        let envelope: Envelope<LoginData> = self
            .api
            .post("/api/auth/login", &body, RequestConfig::default())
            .await
            .map_err(|e| match e {
                ApiError::Status {
                    status: 400 | 401, ..
                } => RepositoryError::InvalidCredentials,
                other => RepositoryError::Api(other),
            })?;
        let data = envelope.data;
        Ok(LoginOutcome {
            user: data.user,
            tokens: TokenPair::new(data.access_token, data.refresh_token),
        })
    }

    async fn logout(&self) -> Result<(), RepositoryError> {
        // The endpoint answers with an empty body; an undecodable success
        // is still a successful logout.
        let result: Result<serde_json::Value, ApiError> = self
            .api
            .post(
                "/api/auth/logout",
                &serde_json::json!({}),
                RequestConfig::default(),
            )
            .await;
        match result {
            Ok(_) | Err(ApiError::InvalidResponse(_)) => Ok(()),
            Err(e) => Err(RepositoryError::Api(e)),
        }
    }

    async fn current_user(&self) -> Result<User, RepositoryError> {
        let envelope: Envelope<User> = self
            .api
            .get("/api/auth/me", RequestConfig::default())
            .await
            .map_err(RepositoryError::Api)?;
        Ok(envelope.data)
    }
}

/// In-memory [`AuthRepository`] holding a single known account.
#[derive(Debug, Clone)]
pub struct MemoryAuthRepository {
    user: User,
    password: String,
}

impl MemoryAuthRepository {
    /// Creates the repository for one account.
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
        }
    }

    fn identifier_matches(&self, identifier: &str) -> bool {
        identifier == self.user.email || identifier == self.user.name
    }
}

#[async_trait]
impl AuthRepository for MemoryAuthRepository {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, RepositoryError> {
        if !self.identifier_matches(&credentials.identifier)
            || credentials.password != self.password
        {
            return Err(RepositoryError::InvalidCredentials);
        }
        let tokens = TokenPair::new(
            uuid::Uuid::new_v4().simple().to_string(),
            uuid::Uuid::new_v4().simple().to_string(),
        );
        Ok(LoginOutcome {
            user: self.user.clone(),
            tokens,
        })
    }

    async fn logout(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn current_user(&self) -> Result<User, RepositoryError> {
        Ok(self.user.clone())
    }
}
