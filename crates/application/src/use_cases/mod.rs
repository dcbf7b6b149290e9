//! Use cases
//!
//! One struct per operation, each a thin orchestration over a repository
//! port plus any domain-level validation that must run first.

mod auth;
mod inventory;
mod posts;
mod stock_in;
mod stock_out;

pub use auth::{Login, Logout};
pub use inventory::{FindInventoryItem, GetInventory};
pub use posts::{FindPost, GetPosts};
pub use stock_in::{CreateStockIn, GetStockIns, UpdateStockInStatus};
pub use stock_out::{CreateStockOut, GetStockOuts, UpdateStockOutStatus};
