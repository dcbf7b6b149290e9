//! In-memory session store, for tests and ephemeral sessions.

use std::sync::Arc;

use tokio::sync::RwLock;

use stockpile_application::ports::{StorageError, TokenStore, UserStore};
use stockpile_domain::{TokenPair, User};

#[derive(Debug, Default)]
struct SessionRecord {
    tokens: Option<TokenPair>,
    user: Option<User>,
}

/// Volatile [`TokenStore`] and [`UserStore`] backed by process memory.
///
/// Clones share the same record, so the API client and the session
/// coordinator observe each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    record: Arc<RwLock<SessionRecord>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a token pair.
    #[must_use]
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            record: Arc::new(RwLock::new(SessionRecord {
                tokens: Some(tokens),
                user: None,
            })),
        }
    }
}

impl TokenStore for MemorySessionStore {
    async fn store_tokens(&self, access: &str, refresh: &str) -> Result<(), StorageError> {
        self.record.write().await.tokens = Some(TokenPair::new(access, refresh));
        Ok(())
    }

    async fn clear_tokens(&self) {
        self.record.write().await.tokens = None;
    }

    async fn access_token(&self) -> Option<String> {
        self.record
            .read()
            .await
            .tokens
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    async fn refresh_token(&self) -> Option<String> {
        self.record
            .read()
            .await
            .tokens
            .as_ref()
            .map(|t| t.refresh_token.clone())
    }
}

impl UserStore for MemorySessionStore {
    async fn store_user(&self, user: &User) -> Result<(), StorageError> {
        self.record.write().await.user = Some(user.clone());
        Ok(())
    }

    async fn load_user(&self) -> Option<User> {
        self.record.read().await.user.clone()
    }

    async fn clear_user(&self) {
        self.record.write().await.user = None;
    }
}
