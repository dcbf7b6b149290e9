//! Inventory repository port.

use async_trait::async_trait;

use stockpile_domain::{InventoryItem, InventoryQuery, Page};

use crate::error::RepositoryError;

/// Port for reading the inventory listing.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Returns one page of inventory items matching the query.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backing call fails.
    async fn list(&self, query: &InventoryQuery) -> Result<Page<InventoryItem>, RepositoryError>;

    /// Returns a single inventory item by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no item carries the id.
    async fn find_by_id(&self, id: &str) -> Result<InventoryItem, RepositoryError>;
}
