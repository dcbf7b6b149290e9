//! Post repository port.

use async_trait::async_trait;

use stockpile_domain::{Page, Post, PostQuery};

use crate::error::RepositoryError;

/// Port for reading published posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns one page of posts.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backing call fails.
    async fn list(&self, query: &PostQuery) -> Result<Page<Post>, RepositoryError>;

    /// Returns a single post by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no post carries the id.
    async fn find_by_id(&self, id: &str) -> Result<Post, RepositoryError>;
}
