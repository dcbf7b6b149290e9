//! Stock movement repository ports.

use async_trait::async_trait;

use stockpile_domain::{
    NewStockIn, NewStockOut, Page, StockInRecord, StockOutRecord, StockQuery, StockStatus,
};

use crate::error::RepositoryError;

/// Port for goods-received records.
#[async_trait]
pub trait StockInRepository: Send + Sync {
    /// Returns one page of stock-in records matching the query.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backing call fails.
    async fn list(&self, query: &StockQuery) -> Result<Page<StockInRecord>, RepositoryError>;

    /// Returns a single stock-in record by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record carries the id.
    async fn find_by_id(&self, id: &str) -> Result<StockInRecord, RepositoryError>;

    /// Creates a new stock-in record from a draft. Missing date and
    /// status default to now and pending.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backing call fails.
    async fn create(&self, draft: &NewStockIn) -> Result<StockInRecord, RepositoryError>;

    /// Moves an existing record to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record carries the id.
    async fn update_status(
        &self,
        id: &str,
        status: StockStatus,
    ) -> Result<StockInRecord, RepositoryError>;
}

/// Port for goods-issued records.
#[async_trait]
pub trait StockOutRepository: Send + Sync {
    /// Returns one page of stock-out records matching the query.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backing call fails.
    async fn list(&self, query: &StockQuery) -> Result<Page<StockOutRecord>, RepositoryError>;

    /// Returns a single stock-out record by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record carries the id.
    async fn find_by_id(&self, id: &str) -> Result<StockOutRecord, RepositoryError>;

    /// Creates a new stock-out record from a draft. Missing date and
    /// status default to now and pending.
    ///
    /// # Errors
    ///
    /// Returns an API error when the backing call fails.
    async fn create(&self, draft: &NewStockOut) -> Result<StockOutRecord, RepositoryError>;

    /// Moves an existing record to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record carries the id.
    async fn update_status(
        &self,
        id: &str,
        status: StockStatus,
    ) -> Result<StockOutRecord, RepositoryError>;
}
