//! Stock movement entities: goods received and goods issued.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Lifecycle status of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Recorded but not yet confirmed.
    #[default]
    Pending,
    /// Confirmed and applied to inventory.
    Completed,
    /// Abandoned; has no inventory effect.
    Cancelled,
}

impl StockStatus {
    /// Wire name of the status, as used in JSON bodies and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Common accessors shared by stock-in and stock-out records, so query
/// filtering is written once for both directions.
pub trait StockRecord {
    /// Record identifier.
    fn id(&self) -> &str;
    /// Current lifecycle status.
    fn status(&self) -> StockStatus;
    /// When the movement happened.
    fn date(&self) -> DateTime<Utc>;
    /// Text fields covered by free-text search.
    fn search_fields(&self) -> Vec<&str>;
}

/// A goods-received record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInRecord {
    /// Record identifier.
    pub id: String,
    /// Identifier of the received product.
    pub product_id: String,
    /// Product display name at time of receipt.
    pub product_name: String,
    /// Units received.
    pub quantity: u32,
    /// Counting unit, e.g. "pc".
    pub unit: String,
    /// When the goods were received.
    pub date: DateTime<Utc>,
    /// Who received the delivery.
    pub received_by: String,
    /// Supplying company, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    /// Supplier invoice reference, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_invoice: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lifecycle status.
    pub status: StockStatus,
}

impl StockRecord for StockInRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> StockStatus {
        self.status
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.product_name.as_str()];
        fields.extend(self.supplier_name.as_deref());
        fields.extend(self.supplier_invoice.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}

/// A goods-issued record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockOutRecord {
    /// Record identifier.
    pub id: String,
    /// Identifier of the issued product.
    pub product_id: String,
    /// Product display name at time of issue.
    pub product_name: String,
    /// Units issued.
    pub quantity: u32,
    /// Counting unit, e.g. "pc".
    pub unit: String,
    /// When the goods were issued.
    pub date: DateTime<Utc>,
    /// Who issued the goods.
    pub issued_by: String,
    /// Receiving person or department.
    pub issued_to: String,
    /// Why the goods left stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lifecycle status.
    pub status: StockStatus,
}

impl StockRecord for StockOutRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> StockStatus {
        self.status
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.product_name.as_str(), self.issued_to.as_str()];
        fields.extend(self.reason.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}

/// Draft for a new goods-received record.
///
/// Date and status are optional: the repository fills in "now" and
/// [`StockStatus::Pending`] when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockIn {
    /// Identifier of the received product.
    pub product_id: String,
    /// Product display name.
    pub product_name: String,
    /// Units received.
    pub quantity: u32,
    /// Counting unit.
    pub unit: String,
    /// When the goods were received; defaults to now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Who received the delivery.
    pub received_by: String,
    /// Supplying company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    /// Supplier invoice reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_invoice: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Initial status; defaults to pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,
}

impl NewStockIn {
    /// Validates the draft before it is submitted.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the product reference, receiver, or
    /// quantity is unusable.
    pub fn validate(&self) -> DomainResult<()> {
        validate_movement(
            &self.product_id,
            &self.product_name,
            self.quantity,
            "receivedBy",
            &self.received_by,
        )
    }
}

/// Draft for a new goods-issued record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockOut {
    /// Identifier of the issued product.
    pub product_id: String,
    /// Product display name.
    pub product_name: String,
    /// Units issued.
    pub quantity: u32,
    /// Counting unit.
    pub unit: String,
    /// When the goods were issued; defaults to now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Who issued the goods.
    pub issued_by: String,
    /// Receiving person or department.
    pub issued_to: String,
    /// Why the goods left stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Initial status; defaults to pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,
}

impl NewStockOut {
    /// Validates the draft before it is submitted.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the product reference, issuer,
    /// recipient, or quantity is unusable.
    pub fn validate(&self) -> DomainResult<()> {
        validate_movement(
            &self.product_id,
            &self.product_name,
            self.quantity,
            "issuedBy",
            &self.issued_by,
        )?;
        if self.issued_to.trim().is_empty() {
            return Err(DomainError::MissingField("issuedTo".to_string()));
        }
        Ok(())
    }
}

fn validate_movement(
    product_id: &str,
    product_name: &str,
    quantity: u32,
    actor_field: &str,
    actor: &str,
) -> DomainResult<()> {
    if product_id.trim().is_empty() {
        return Err(DomainError::InvalidIdentifier("productId".to_string()));
    }
    if product_name.trim().is_empty() {
        return Err(DomainError::MissingField("productName".to_string()));
    }
    if actor.trim().is_empty() {
        return Err(DomainError::MissingField(actor_field.to_string()));
    }
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity(i64::from(quantity)));
    }
    Ok(())
}
