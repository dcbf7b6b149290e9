//! Post repository adapters.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use stockpile_application::RepositoryError;
use stockpile_application::ports::{ApiClient, PostRepository, RequestConfig};
use stockpile_domain::{Page, Post, PostQuery};

use crate::http::Envelope;

use super::{map_api, with_pagination};

/// [`PostRepository`] backed by the HTTP API.
pub struct HttpPostRepository<C> {
    api: Arc<C>,
}

impl<C> HttpPostRepository<C> {
    /// Creates the repository over a shared API client.
    #[must_use]
    pub const fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: ApiClient> PostRepository for HttpPostRepository<C> {
    async fn list(&self, query: &PostQuery) -> Result<Page<Post>, RepositoryError> {
        let config = with_pagination(RequestConfig::default(), query.pagination);
        let envelope: Envelope<Page<Post>> = self
            .api
            .get("/api/posts", config)
            .await
            .map_err(RepositoryError::Api)?;
        Ok(envelope.data)
    }

    async fn find_by_id(&self, id: &str) -> Result<Post, RepositoryError> {
        let envelope: Envelope<Post> = self
            .api
            .get(&format!("/api/posts/{id}"), RequestConfig::default())
            .await
            .map_err(|e| map_api(id, e))?;
        Ok(envelope.data)
    }
}

/// In-memory [`PostRepository`] over a fixed post list.
#[derive(Debug, Clone, Default)]
pub struct MemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl MemoryPostRepository {
    /// Creates the repository pre-seeded with posts.
    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<Page<Post>, RepositoryError> {
        let posts = self.posts.read().await;
        Ok(Page::new(query.pagination.slice(&posts), posts.len()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Post, RepositoryError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}
