//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod api_client;
mod auth_repository;
mod inventory_repository;
mod post_repository;
mod stock_repository;
mod token_store;

pub use api_client::{ApiClient, ApiError, RequestConfig};
pub use auth_repository::{AuthRepository, LoginOutcome};
pub use inventory_repository::InventoryRepository;
pub use post_repository::PostRepository;
pub use stock_repository::{StockInRepository, StockOutRepository};
pub use token_store::{StorageError, TokenStore, UserStore};
