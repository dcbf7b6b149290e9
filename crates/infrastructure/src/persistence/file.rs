//! File-backed session store.
//!
//! Everything the device remembers between launches lives in one JSON
//! document: the token pair and the signed-in user's record. Reads are
//! fail-open so a corrupt or missing file behaves like a signed-out
//! device instead of blocking startup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use stockpile_application::ports::{StorageError, TokenStore, UserStore};
use stockpile_domain::User;

/// On-disk layout of the session document.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SessionFile {
    access_token: Option<String>,
    refresh_token: Option<String>,
    #[serde(rename = "userData")]
    user: Option<User>,
}

/// [`TokenStore`] and [`UserStore`] persisted to a single JSON file.
///
/// Writes go through read-modify-write under an internal lock, so a
/// token update never drops the user record and vice versa. Clones share
/// the lock and the path.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileSessionStore {
    /// Creates a store backed by the given file. The file and its parent
    /// directory are created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a store at the platform's per-user data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the platform exposes no data
    /// directory.
    pub fn at_default_location() -> Result<Self, StorageError> {
        let base = dirs::data_dir()
            .ok_or_else(|| StorageError::Io("no user data directory available".to_string()))?;
        Ok(Self::new(base.join("stockpile").join("session.json")))
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the session document, treating any failure as empty.
    async fn load(&self) -> SessionFile {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SessionFile::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return SessionFile::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file corrupt");
                SessionFile::default()
            }
        }
    }

    async fn save(&self, file: &SessionFile) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(file)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl TokenStore for FileSessionStore {
    async fn store_tokens(&self, access: &str, refresh: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await;
        file.access_token = Some(access.to_string());
        file.refresh_token = Some(refresh.to_string());
        self.save(&file).await
    }

    async fn clear_tokens(&self) {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await;
        file.access_token = None;
        file.refresh_token = None;
        if let Err(e) = self.save(&file).await {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to clear tokens");
        }
    }

    async fn access_token(&self) -> Option<String> {
        self.load().await.access_token
    }

    async fn refresh_token(&self) -> Option<String> {
        self.load().await.refresh_token
    }
}

impl UserStore for FileSessionStore {
    async fn store_user(&self, user: &User) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await;
        file.user = Some(user.clone());
        self.save(&file).await
    }

    async fn load_user(&self) -> Option<User> {
        self.load().await.user
    }

    async fn clear_user(&self) {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await;
        file.user = None;
        if let Err(e) = self.save(&file).await {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to clear user record");
        }
    }
}
