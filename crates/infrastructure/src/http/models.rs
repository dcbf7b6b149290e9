//! Wire-format payloads shared across the HTTP adapters.

use serde::{Deserialize, Serialize};

/// The server wraps every successful response body as `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Body of the refresh call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Payload inside the refresh response envelope.
///
/// The refresh token is optional: servers that rotate refresh tokens
/// return a new one, servers that do not omit the field and the client
/// keeps the old token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshedTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}
