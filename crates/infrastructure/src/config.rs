//! Environment configuration.
//!
//! The client takes a single externally supplied value: the API base
//! URL, read once at process start.

use thiserror::Error;
use url::Url;

/// Environment variable carrying the API base URL.
pub const API_URL_VAR: &str = "STOCKPILE_API_URL";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base-URL variable is not set.
    #[error("{API_URL_VAR} is not set")]
    MissingApiUrl,

    /// The base-URL variable does not parse as a URL.
    #[error("invalid API URL: {0}")]
    InvalidApiUrl(String),
}

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct Env {
    api_url: Url,
}

impl Env {
    /// Creates a configuration from an explicit base URL.
    #[must_use]
    pub const fn new(api_url: Url) -> Self {
        Self { api_url }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the variable is absent or does not
    /// parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(API_URL_VAR).map_err(|_| ConfigError::MissingApiUrl)?;
        let api_url = raw
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidApiUrl(format!("{e}: {raw}")))?;
        Ok(Self { api_url })
    }

    /// The API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url() {
        let env = Env::new("https://api.example.com".parse().unwrap());
        assert_eq!(env.api_url().as_str(), "https://api.example.com/");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = "not a url".parse::<Url>();
        assert!(result.is_err());
    }
}
