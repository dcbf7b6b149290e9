//! Token and user-record storage ports.

use std::future::Future;

use thiserror::Error;

use stockpile_domain::User;

/// Errors from the persistence layer backing the session stores.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The underlying key-value persistence is unavailable.
    #[error("storage I/O failure: {0}")]
    Io(String),

    /// A stored value could not be encoded or decoded.
    #[error("storage serialization failure: {0}")]
    Serialization(String),
}

/// Port for durable storage of the device's token pair.
///
/// Reads are fail-open: a storage failure is logged by the adapter and
/// surfaced as "no token", so a flaky disk never blocks outbound
/// requests. Authorization proper is enforced server-side.
pub trait TokenStore: Send + Sync {
    /// Persists both tokens, overwriting any existing pair.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the persistence layer is
    /// unavailable. Callers treat this as non-fatal and log it.
    fn store_tokens(
        &self,
        access: &str,
        refresh: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Removes both tokens. Idempotent; calling with nothing stored is a
    /// no-op and never fails.
    fn clear_tokens(&self) -> impl Future<Output = ()> + Send;

    /// Returns the stored access token, or `None` when absent or
    /// unreadable.
    fn access_token(&self) -> impl Future<Output = Option<String>> + Send;

    /// Returns the stored refresh token, or `None` when absent or
    /// unreadable.
    fn refresh_token(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Port for the persisted user record checked during session restore.
pub trait UserStore: Send + Sync {
    /// Persists the signed-in user's record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the persistence layer is
    /// unavailable. Callers treat this as non-fatal and log it.
    fn store_user(&self, user: &User) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Returns the stored user record, or `None` when absent or
    /// unreadable.
    fn load_user(&self) -> impl Future<Output = Option<User>> + Send;

    /// Removes the stored user record. Idempotent and infallible.
    fn clear_user(&self) -> impl Future<Output = ()> + Send;
}
