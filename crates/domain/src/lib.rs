//! Stockpile Domain - Core business types
//!
//! This crate defines the domain model for the Stockpile inventory client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod inventory;
pub mod post;
pub mod query;
pub mod session;
pub mod stock;

pub use auth::{Credentials, TokenPair, User};
pub use error::{DomainError, DomainResult};
pub use inventory::InventoryItem;
pub use post::Post;
pub use query::{InventoryQuery, Page, Pagination, PostQuery, SortOrder, StockQuery};
pub use session::SessionState;
pub use stock::{NewStockIn, NewStockOut, StockInRecord, StockOutRecord, StockStatus};
