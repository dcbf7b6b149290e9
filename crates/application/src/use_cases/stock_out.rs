//! Stock-out use cases.

use stockpile_domain::{NewStockOut, Page, StockOutRecord, StockQuery, StockStatus};

use crate::error::ApplicationResult;
use crate::ports::StockOutRepository;

/// Fetches one page of goods-issued records.
pub struct GetStockOuts<R> {
    repo: R,
}

impl<R: StockOutRepository> GetStockOuts<R> {
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
    pub async fn execute(&self, query: &StockQuery) -> ApplicationResult<Page<StockOutRecord>> {
        query.pagination.validate()?;
        Ok(self.repo.list(query).await?)
    }
}

/// Records goods issued out of stock.
pub struct CreateStockOut<R> {
    repo: R,
}

impl<R: StockOutRepository> CreateStockOut<R> {
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
    pub async fn execute(&self, draft: &NewStockOut) -> ApplicationResult<StockOutRecord> {
        draft.validate()?;
        Ok(self.repo.create(draft).await?)
    }
}

/// Moves a goods-issued record through its lifecycle.
pub struct UpdateStockOutStatus<R> {
    repo: R,
}

impl<R: StockOutRepository> UpdateStockOutStatus<R> {
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
    pub async fn execute(
        &self,
        id: &str,
        status: StockStatus,
    ) -> ApplicationResult<StockOutRecord> {
        Ok(self.repo.update_status(id, status).await?)
    }
}
