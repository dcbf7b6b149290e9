//! Repository adapters: HTTP-backed for production, in-memory for tests
//! and offline demos.

mod auth;
mod inventory;
mod posts;
mod stock_in;
mod stock_out;

pub use auth::{HttpAuthRepository, MemoryAuthRepository};
pub use inventory::{HttpInventoryRepository, MemoryInventoryRepository};
pub use posts::{HttpPostRepository, MemoryPostRepository};
pub use stock_in::{HttpStockInRepository, MemoryStockInRepository};
pub use stock_out::{HttpStockOutRepository, MemoryStockOutRepository};

use stockpile_application::RepositoryError;
use stockpile_application::ports::{ApiError, RequestConfig};
use stockpile_domain::{Pagination, StockQuery};

/// Maps a by-id API failure, turning a 404 into not-found for `id`.
pub(crate) fn map_api(id: &str, error: ApiError) -> RepositoryError {
    match error {
        ApiError::Status { status: 404, .. } => RepositoryError::NotFound(id.to_string()),
        other => RepositoryError::Api(other),
    }
}

/// Adds the page selection to a request.
pub(crate) fn with_pagination(config: RequestConfig, pagination: Pagination) -> RequestConfig {
    config
        .query("page", pagination.page.to_string())
        .query("pageSize", pagination.page_size.to_string())
}

/// Builds the query parameters shared by both stock listing endpoints.
pub(crate) fn stock_query_config(query: &StockQuery) -> RequestConfig {
    let mut config = with_pagination(RequestConfig::default(), query.pagination);
    if let Some(status) = query.status {
        config = config.query("status", status.as_str());
    }
    if let Some(start) = query.start_date {
        config = config.query("startDate", start.to_rfc3339());
    }
    if let Some(end) = query.end_date {
        config = config.query("endDate", end.to_rfc3339());
    }
    if let Some(search) = &query.search {
        config = config.query("search", search);
    }
    config
}
