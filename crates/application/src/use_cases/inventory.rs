//! Inventory use cases.

use stockpile_domain::{InventoryItem, InventoryQuery, Page};

use crate::error::ApplicationResult;
use crate::ports::InventoryRepository;

/// Fetches one page of the inventory listing.
pub struct GetInventory<R> {
    repo: R,
}

impl<R: InventoryRepository> GetInventory<R> {
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
    pub async fn execute(&self, query: &InventoryQuery) -> ApplicationResult<Page<InventoryItem>> {
        query.pagination.validate()?;
        Ok(self.repo.list(query).await?)
    }
}

/// Fetches a single inventory item by id.
pub struct FindInventoryItem<R> {
    repo: R,
}

impl<R: InventoryRepository> FindInventoryItem<R> {
    /// Creates the use case.
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up the item.
    ///
    /// # Errors
    ///
    /// Returns the repository failure, including not-found.
    pub async fn execute(&self, id: &str) -> ApplicationResult<InventoryItem> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
