//! Stock-in use cases.

use stockpile_domain::{NewStockIn, Page, StockInRecord, StockQuery, StockStatus};

use crate::error::ApplicationResult;
use crate::ports::StockInRepository;

/// Fetches one page of goods-received records.
pub struct GetStockIns<R> {
    repo: R,
}

impl<R: StockInRepository> GetStockIns<R> {
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
    pub async fn execute(&self, query: &StockQuery) -> ApplicationResult<Page<StockInRecord>> {
        query.pagination.validate()?;
        Ok(self.repo.list(query).await?)
    }
}

/// Records newly received goods.
pub struct CreateStockIn<R> {
    repo: R,
}

impl<R: StockInRepository> CreateStockIn<R> {
    /// Creates the use case.
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates the draft and submits it.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the draft is unusable, or the
    /// repository failure.
    pub async fn execute(&self, draft: &NewStockIn) -> ApplicationResult<StockInRecord> {
        draft.validate()?;
        Ok(self.repo.create(draft).await?)
    }
}

/// Moves a goods-received record through its lifecycle.
pub struct UpdateStockInStatus<R> {
    repo: R,
}

impl<R: StockInRepository> UpdateStockInStatus<R> {
    /// Creates the use case.
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Applies the new status.
    ///
    /// # Errors
    ///
    /// Returns the repository failure, including not-found.
    pub async fn execute(&self, id: &str, status: StockStatus) -> ApplicationResult<StockInRecord> {
        Ok(self.repo.update_status(id, status).await?)
    }
}
