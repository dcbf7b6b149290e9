//! Goods-issued repository adapters.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;

use stockpile_application::RepositoryError;
use stockpile_application::ports::{ApiClient, RequestConfig, StockOutRepository};
use stockpile_domain::{NewStockOut, Page, StockOutRecord, StockQuery, StockStatus};

use crate::http::Envelope;

use super::{map_api, stock_query_config};

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: StockStatus,
}

/// [`StockOutRepository`] backed by the HTTP API.
pub struct HttpStockOutRepository<C> {
    api: Arc<C>,
}

impl<C> HttpStockOutRepository<C> {
    /// Creates the repository over a shared API client.
    #[must_use]
    pub const fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: ApiClient> StockOutRepository for HttpStockOutRepository<C> {
    async fn list(&self, query: &StockQuery) -> Result<Page<StockOutRecord>, RepositoryError> {
        let envelope: Envelope<Page<StockOutRecord>> = self
            .api
            .get("/api/stock-outs", stock_query_config(query))
            .await
            .map_err(RepositoryError::Api)?;
        Ok(envelope.data)
    }

    async fn find_by_id(&self, id: &str) -> Result<StockOutRecord, RepositoryError> {
        let envelope: Envelope<StockOutRecord> = self
            .api
            .get(&format!("/api/stock-outs/{id}"), RequestConfig::default())
            .await
            .map_err(|e| map_api(id, e))?;
        Ok(envelope.data)
    }

    async fn create(&self, draft: &NewStockOut) -> Result<StockOutRecord, RepositoryError> {
        let envelope: Envelope<StockOutRecord> = self
            .api
            .post("/api/stock-outs", draft, RequestConfig::default())
            .await
            .map_err(RepositoryError::Api)?;
        Ok(envelope.data)
    }

    async fn update_status(
        &self,
        id: &str,
        status: StockStatus,
    ) -> Result<StockOutRecord, RepositoryError> {
        let envelope: Envelope<StockOutRecord> = self
            .api
            .patch(
                &format!("/api/stock-outs/{id}/status"),
                &StatusUpdate { status },
                RequestConfig::default(),
            )
            .await
            .map_err(|e| map_api(id, e))?;
        Ok(envelope.data)
    }
}

/// In-memory [`StockOutRepository`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStockOutRepository {
    records: Arc<RwLock<Vec<StockOutRecord>>>,
}

impl MemoryStockOutRepository {
    /// Creates the repository pre-seeded with records.
    #[must_use]
    pub fn with_records(records: Vec<StockOutRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl StockOutRepository for MemoryStockOutRepository {
    async fn list(&self, query: &StockQuery) -> Result<Page<StockOutRecord>, RepositoryError> {
        let records = self.records.read().await;
        let mut matching: Vec<StockOutRecord> =
            records.iter().filter(|r| query.matches(*r)).cloned().collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        let count = matching.len();
        Ok(Page::new(query.pagination.slice(&matching), count))
    }

    async fn find_by_id(&self, id: &str) -> Result<StockOutRecord, RepositoryError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: &NewStockOut) -> Result<StockOutRecord, RepositoryError> {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let record = StockOutRecord {
            id: format!("so-{}", &suffix[..6]),
            product_id: draft.product_id.clone(),
            product_name: draft.product_name.clone(),
            quantity: draft.quantity,
            unit: draft.unit.clone(),
            date: draft.date.unwrap_or_else(Utc::now),
            issued_by: draft.issued_by.clone(),
            issued_to: draft.issued_to.clone(),
            reason: draft.reason.clone(),
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
    ) -> Result<StockOutRecord, RepositoryError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        record.status = status;
        Ok(record.clone())
    }
}
