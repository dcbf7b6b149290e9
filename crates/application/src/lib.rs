//! Stockpile Application - Use cases and ports
//!
//! This crate defines the boundaries between the domain core and the
//! outside world: ports for the authenticated API client, token/user
//! storage, and the feature repositories, plus the use cases and the
//! session coordinator that drive them.

pub mod error;
pub mod ports;
pub mod session;
pub mod stores;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult, RepositoryError};
pub use session::{SessionError, SessionManager, SessionPolicy};
pub use stores::{ListSnapshot, ListStore};
