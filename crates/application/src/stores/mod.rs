//! Observable state containers for list screens.

mod list_store;

pub use list_store::{ListSnapshot, ListStore};
