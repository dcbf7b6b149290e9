//! Post use cases.

use stockpile_domain::{Page, Post, PostQuery};

use crate::error::ApplicationResult;
use crate::ports::PostRepository;

/// Fetches one page of posts.
pub struct GetPosts<R> {
    repo: R,
}

impl<R: PostRepository> GetPosts<R> {
    /// Creates the use case.
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates the pagination and runs the query.
    ///
    /// # Errors
    ///
    /// Returns a domain error for unusable pagination, or the repository
    /// failure.
    pub async fn execute(&self, query: &PostQuery) -> ApplicationResult<Page<Post>> {
        query.pagination.validate()?;
        Ok(self.repo.list(query).await?)
    }
}

/// Fetches a single post by id.
pub struct FindPost<R> {
    repo: R,
}

impl<R: PostRepository> FindPost<R> {
    /// Creates the use case.
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up the post.
    ///
    /// # Errors
    ///
    /// Returns the repository failure, including not-found.
    pub async fn execute(&self, id: &str) -> ApplicationResult<Post> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
