//! Authenticated reqwest client with one-shot token refresh.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use stockpile_application::ports::{ApiClient, ApiError, RequestConfig, TokenStore};

use super::models::{Envelope, RefreshRequest, RefreshedTokens};

/// Path of the token-refresh endpoint, relative to the base URL.
const REFRESH_PATH: &str = "/api/auth/refresh-token";

/// Per-request timeout applied to every call, the refresh included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of the [`ApiClient`] port.
///
/// Every request reads the current access token from the shared store and
/// attaches it as a bearer header. A 401 response triggers at most one
/// refresh-and-retry: refreshes are serialized behind an internal gate so
/// that concurrent 401s from parallel requests produce a single refresh
/// call, with late arrivals reusing the token the first one obtained.
pub struct HttpApiClient<S> {
    base_url: Url,
    http: reqwest::Client,
    tokens: Arc<S>,
    refresh_gate: tokio::sync::Mutex<()>,
}

impl<S: TokenStore> HttpApiClient<S> {
    /// Creates a client for the given API base URL, sharing the token
    /// store with the session coordinator.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: Url, tokens: Arc<S>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            base_url,
            http,
            tokens,
            refresh_gate: tokio::sync::Mutex::new(()),
        })
    }

    /// Resolves a request path against the base URL.
    fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
            .parse()
            .map_err(|e| ApiError::InvalidRequest(format!("bad request path {path}: {e}")))
    }

    /// Sends one request with the given bearer token attached.
    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Option<&serde_json::Value>,
        config: &RequestConfig,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        for (name, value) in &config.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if !config.query.is_empty() {
            request = request.query(&config.query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(map_transport)
    }

    /// Runs a request through the one-shot refresh flow and decodes the
    /// body.
    async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        config: RequestConfig,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        let stale = self.tokens.access_token().await;
        let response = self
            .dispatch(
                method.clone(),
                url.clone(),
                body.as_ref(),
                &config,
                stale.as_deref(),
            )
            .await?;
        // A 401 on a request that carried no token is a plain rejection
        // (e.g. bad login credentials), not an expired session.
        if response.status() != StatusCode::UNAUTHORIZED || stale.is_none() {
            return read_json(response).await;
        }

        // The retry carries the returned token directly: even if the
        // store failed to persist it, the request must use the fresh one.
        let fresh = self.refresh_access_token(stale).await?;
        let retried = self
            .dispatch(method, url, body.as_ref(), &config, Some(&fresh))
            .await?;
        read_json(retried).await
    }

    /// Exchanges the refresh token for a fresh access token, returning
    /// the token the retry must carry.
    ///
    /// `stale` is the access token the failing request was sent with.
    /// Under the gate, a stored token differing from `stale` means
    /// another task already refreshed; that token is reused without a
    /// second network call. A cleared store (a concurrent refresh that
    /// failed) is not a replacement token and falls through to expire.
    /// Any refresh failure clears the stored tokens and surfaces
    /// [`ApiError::AuthExpired`].
    async fn refresh_access_token(&self, stale: Option<String>) -> Result<String, ApiError> {
        let _guard = self.refresh_gate.lock().await;

        if let Some(current) = self.tokens.access_token().await
            && stale.as_deref() != Some(current.as_str())
        {
            return Ok(current);
        }

        let Some(refresh) = self.tokens.refresh_token().await else {
            self.tokens.clear_tokens().await;
            return Err(ApiError::AuthExpired);
        };

        let url = self.endpoint_url(REFRESH_PATH)?;
        let body = RefreshRequest {
            refresh_token: &refresh,
        };
        let result = async {
            let response = self
                .http
                .post(url)
                .json(&body)
                .send()
                .await
                .map_err(map_transport)?;
            read_json::<Envelope<RefreshedTokens>>(response).await
        }
        .await;

        match result {
            Ok(envelope) => {
                let renewed = envelope.data;
                let next_refresh = renewed.refresh_token.as_deref().unwrap_or(&refresh);
                if let Err(e) = self
                    .tokens
                    .store_tokens(&renewed.access_token, next_refresh)
                    .await
                {
                    tracing::warn!(error = %e, "failed to persist refreshed tokens");
                }
                Ok(renewed.access_token)
            }
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed, clearing session tokens");
                self.tokens.clear_tokens().await;
                Err(ApiError::AuthExpired)
            }
        }
    }
}

impl<S: TokenStore> ApiClient for HttpApiClient<S> {
    async fn get<T>(&self, path: &str, config: RequestConfig) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        self.execute(Method::GET, path, None, config).await
    }

    async fn post<B, T>(&self, path: &str, body: &B, config: RequestConfig) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body = encode_body(body)?;
        self.execute(Method::POST, path, Some(body), config).await
    }

    async fn patch<B, T>(&self, path: &str, body: &B, config: RequestConfig) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body = encode_body(body)?;
        self.execute(Method::PATCH, path, Some(body), config).await
    }

    async fn delete<T>(&self, path: &str, config: RequestConfig) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        self.execute(Method::DELETE, path, None, config).await
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

fn map_transport(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(error.to_string())
    }
}

/// Decodes a success body, or turns a non-success status into
/// [`ApiError::Status`] carrying whatever text the server sent.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await.map_err(map_transport)?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
