//! Authenticated API client port.

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Only [`ApiError::AuthExpired`] carries retry semantics inside the
/// client (the one-shot refresh flow). Everything else is surfaced
/// unchanged; further retries are the caller's responsibility.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The refresh token was missing or the refresh call failed. The
    /// session coordinator is the single layer that translates this into
    /// cleared user state.
    #[error("session expired, re-authentication required")]
    AuthExpired,

    /// The request timed out at the transport level.
    #[error("request timed out")]
    Timeout,

    /// Network-level failure: connection, DNS, TLS.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status other than the
    /// refreshable 401.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if readable.
        message: String,
    },

    /// The response body could not be deserialized.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// The request could not be constructed (bad path or body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Per-request options for a single API call.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Extra headers to attach.
    pub headers: Vec<(String, String)>,
    /// Query parameters to append.
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// Port for the authenticated HTTP API client.
///
/// Implementations attach the current bearer token to every call and run
/// the one-shot refresh-and-retry flow on 401 responses. Note that this
/// makes even `get` a local side effect: a refresh triggered by a read
/// writes new tokens to the token store.
pub trait ApiClient: Send + Sync {
    /// Issues a GET request and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status,
    /// or an unreadable body.
    fn get<T>(
        &self,
        path: &str,
        config: RequestConfig,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send;

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status,
    /// or an unreadable body.
    fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        config: RequestConfig,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Issues a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status,
    /// or an unreadable body.
    fn patch<B, T>(
        &self,
        path: &str,
        body: &B,
        config: RequestConfig,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Issues a DELETE request and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status,
    /// or an unreadable body.
    fn delete<T>(
        &self,
        path: &str,
        config: RequestConfig,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send;
}
