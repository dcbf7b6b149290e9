//! Inventory entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single inventory line: current stock for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Inventory record identifier.
    pub id: String,
    /// Identifier of the tracked product.
    pub product_id: String,
    /// Product display name.
    pub name: String,
    /// Stock-keeping unit code.
    pub sku: String,
    /// Product category.
    pub category: String,
    /// Units currently on hand.
    pub quantity: u32,
    /// Counting unit, e.g. "pc".
    pub unit: String,
    /// Stock level at which the item should be reordered.
    pub reorder_level: u32,
    /// When the record was last written.
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// Returns true when on-hand stock has reached the reorder level.
    #[must_use]
    pub const fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}
