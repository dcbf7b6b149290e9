//! Inventory repository adapters.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use stockpile_application::RepositoryError;
use stockpile_application::ports::{ApiClient, InventoryRepository, RequestConfig};
use stockpile_domain::{InventoryItem, InventoryQuery, Page};

use crate::http::Envelope;

use super::{map_api, with_pagination};

fn list_config(query: &InventoryQuery) -> RequestConfig {
    let mut config = with_pagination(RequestConfig::default(), query.pagination);
    if let Some(category) = &query.category {
        config = config.query("category", category);
    }
    if let Some(search) = &query.search {
        config = config.query("search", search);
    }
    if let Some(sort_by) = &query.sort_by {
        config = config.query("sortBy", sort_by);
    }
    if let Some(sort_order) = query.sort_order {
        config = config.query("sortOrder", sort_order.as_str());
    }
    config
}

/// [`InventoryRepository`] backed by the HTTP API.
pub struct HttpInventoryRepository<C> {
    api: Arc<C>,
}

impl<C> HttpInventoryRepository<C> {
    /// Creates the repository over a shared API client.
    #[must_use]
    pub const fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: ApiClient> InventoryRepository for HttpInventoryRepository<C> {
    async fn list(&self, query: &InventoryQuery) -> Result<Page<InventoryItem>, RepositoryError> {
        let envelope: Envelope<Page<InventoryItem>> = self
            .api
            .get("/api/inventory", list_config(query))
            .await
            .map_err(RepositoryError::Api)?;
        Ok(envelope.data)
    }

    async fn find_by_id(&self, id: &str) -> Result<InventoryItem, RepositoryError> {
        let envelope: Envelope<InventoryItem> = self
            .api
            .get(&format!("/api/inventory/{id}"), RequestConfig::default())
            .await
            .map_err(|e| map_api(id, e))?;
        Ok(envelope.data)
    }
}

/// In-memory [`InventoryRepository`] over a fixed item list.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventoryRepository {
    items: Arc<RwLock<Vec<InventoryItem>>>,
}

impl MemoryInventoryRepository {
    /// Creates the repository pre-seeded with items.
    #[must_use]
    pub fn with_items(items: Vec<InventoryItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl InventoryRepository for MemoryInventoryRepository {
    async fn list(&self, query: &InventoryQuery) -> Result<Page<InventoryItem>, RepositoryError> {
        let items = self.items.read().await;
        let mut matching: Vec<InventoryItem> =
            items.iter().filter(|i| query.matches(i)).cloned().collect();
        query.apply_sort(&mut matching);
        let count = matching.len();
        Ok(Page::new(query.pagination.slice(&matching), count))
    }

    async fn find_by_id(&self, id: &str) -> Result<InventoryItem, RepositoryError> {
        self.items
            .read()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}
