//! Stockpile Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the authenticated reqwest API client, the
//! session stores, and the feature repositories (HTTP-backed and
//! in-memory).

pub mod config;
pub mod http;
pub mod persistence;
pub mod repositories;

pub use config::{ConfigError, Env};
pub use http::HttpApiClient;
pub use persistence::{FileSessionStore, MemorySessionStore};
pub use repositories::{
    HttpAuthRepository, HttpInventoryRepository, HttpPostRepository, HttpStockInRepository,
    HttpStockOutRepository, MemoryAuthRepository, MemoryInventoryRepository, MemoryPostRepository,
    MemoryStockInRepository, MemoryStockOutRepository,
};
