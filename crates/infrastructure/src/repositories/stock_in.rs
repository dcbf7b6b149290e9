//! Goods-received repository adapters.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;

use stockpile_application::RepositoryError;
use stockpile_application::ports::{ApiClient, RequestConfig, StockInRepository};
use stockpile_domain::{NewStockIn, Page, StockInRecord, StockQuery, StockStatus};

use crate::http::Envelope;

use super::{map_api, stock_query_config};

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: StockStatus,
}

/// [`StockInRepository`] backed by the HTTP API.
pub struct HttpStockInRepository<C> {
    api: Arc<C>,
}

impl<C> HttpStockInRepository<C> {
    /// Creates the repository over a shared API client.
    #[must_use]
    pub const fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: ApiClient> StockInRepository for HttpStockInRepository<C> {
    async fn list(&self, query: &StockQuery) -> Result<Page<StockInRecord>, RepositoryError> {
        let envelope: Envelope<Page<StockInRecord>> = self
            .api
            .get("/api/stock-ins", stock_query_config(query))
            .await
            .map_err(RepositoryError::Api)?;
        Ok(envelope.data)
    }

    async fn find_by_id(&self, id: &str) -> Result<StockInRecord, RepositoryError> {
        let envelope: Envelope<StockInRecord> = self
            .api
            .get(&format!("/api/stock-ins/{id}"), RequestConfig::default())
            .await
            .map_err(|e| map_api(id, e))?;
        Ok(envelope.data)
    }

    async fn create(&self, draft: &NewStockIn) -> Result<StockInRecord, RepositoryError> {
        let envelope: Envelope<StockInRecord> = self
            .api
            .post("/api/stock-ins", draft, RequestConfig::default())
            .await
            .map_err(RepositoryError::Api)?;
        Ok(envelope.data)
    }

    async fn update_status(
        &self,
        id: &str,
        status: StockStatus,
    ) -> Result<StockInRecord, RepositoryError> {
        let envelope: Envelope<StockInRecord> = self
            .api
            .patch(
                &format!("/api/stock-ins/{id}/status"),
                &StatusUpdate { status },
                RequestConfig::default(),
            )
            .await
            .map_err(|e| map_api(id, e))?;
        Ok(envelope.data)
    }
}

/// In-memory [`StockInRepository`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStockInRepository {
    records: Arc<RwLock<Vec<StockInRecord>>>,
}

impl MemoryStockInRepository {
    /// Creates the repository pre-seeded with records.
    #[must_use]
    pub fn with_records(records: Vec<StockInRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl StockInRepository for MemoryStockInRepository {
    async fn list(&self, query: &StockQuery) -> Result<Page<StockInRecord>, RepositoryError> {
        let records = self.records.read().await;
        let mut matching: Vec<StockInRecord> =
            records.iter().filter(|r| query.matches(*r)).cloned().collect();
        // Newest first, matching the backend's listing order.
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        let count = matching.len();
        Ok(Page::new(query.pagination.slice(&matching), count))
    }

    async fn find_by_id(&self, id: &str) -> Result<StockInRecord, RepositoryError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: &NewStockIn) -> Result<StockInRecord, RepositoryError> {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let record = StockInRecord {
            id: format!("si-{}", &suffix[..6]),
            product_id: draft.product_id.clone(),
            product_name: draft.product_name.clone(),
            quantity: draft.quantity,
            unit: draft.unit.clone(),
            date: draft.date.unwrap_or_else(Utc::now),
            received_by: draft.received_by.clone(),
            supplier_name: draft.supplier_name.clone(),
            supplier_invoice: draft.supplier_invoice.clone(),
            notes: draft.notes.clone(),
            status: draft.status.unwrap_or_default(),
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_status(
        &self,
        id: &str,
        status: StockStatus,
    ) -> Result<StockInRecord, RepositoryError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        record.status = status;
        Ok(record.clone())
    }
}
