//! HTTP transport: the authenticated reqwest client.

mod client;
mod models;

pub use client::HttpApiClient;
pub(crate) use models::Envelope;
