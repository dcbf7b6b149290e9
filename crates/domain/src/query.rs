//! List queries, filtering, and pagination.
//!
//! Filter logic lives here, on the query types themselves, so the
//! in-memory repositories and any test double apply exactly the rules the
//! backend documents for its list endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::inventory::InventoryItem;
use crate::stock::{StockRecord, StockStatus};

/// Default page size for list screens.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page number, starting at 1.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Creates a pagination selection.
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Rejects zero pages and zero page sizes.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPagination`] when either value is 0.
    pub fn validate(&self) -> DomainResult<()> {
        if self.page == 0 || self.page_size == 0 {
            return Err(DomainError::InvalidPagination(format!(
                "page {} size {}",
                self.page, self.page_size
            )));
        }
        Ok(())
    }

    /// Returns the selected page of `items`.
    #[must_use]
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let start = (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize);
        items
            .iter()
            .skip(start)
            .take(self.page_size as usize)
            .cloned()
            .collect()
    }
}

/// One page of results plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub results: Vec<T>,
    /// Total matching items across all pages.
    pub count: usize,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub const fn new(results: Vec<T>, count: usize) -> Self {
        Self { results, count }
    }

    /// Returns true when no items matched at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of pages needed for `count` items at the given page size.
    #[must_use]
    pub const fn page_count(&self, page_size: u32) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.count.div_ceil(page_size as usize)
    }
}

/// Sort direction for sortable list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire name of the direction, as used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query over the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQuery {
    /// Page selection.
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Restrict to one category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive search over name and SKU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field to sort by: "name", "sku", or "quantity".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl InventoryQuery {
    /// Returns true if `item` satisfies the category and search filters.
    #[must_use]
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(category) = &self.category
            && !item.category.eq_ignore_ascii_case(category)
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            return item.name.to_lowercase().contains(&needle)
                || item.sku.to_lowercase().contains(&needle);
        }
        true
    }

    /// Sorts `items` in place according to `sort_by` / `sort_order`.
    ///
    /// Unknown sort fields leave the input order untouched.
    pub fn apply_sort(&self, items: &mut [InventoryItem]) {
        let Some(sort_by) = self.sort_by.as_deref() else {
            return;
        };
        match sort_by {
            "name" => items.sort_by(|a, b| a.name.cmp(&b.name)),
            "sku" => items.sort_by(|a, b| a.sku.cmp(&b.sku)),
            "quantity" => items.sort_by_key(|i| i.quantity),
            _ => return,
        }
        if self.sort_order == Some(SortOrder::Desc) {
            items.reverse();
        }
    }
}

/// Query over stock-in or stock-out listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    /// Page selection.
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Restrict to one lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,
    /// Inclusive lower bound on the movement date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the movement date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Case-insensitive search over the record's text fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl StockQuery {
    /// Returns true if `record` satisfies every configured filter.
    #[must_use]
    pub fn matches<R: StockRecord>(&self, record: &R) -> bool {
        if let Some(status) = self.status
            && record.status() != status
        {
            return false;
        }
        if let Some(start) = self.start_date
            && record.date() < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && record.date() > end
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            return record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }
        true
    }
}

/// Query over the posts listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    /// Page selection.
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::stock::StockInRecord;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn record(days_ago: i64, status: StockStatus, product: &str) -> StockInRecord {
        StockInRecord {
            id: format!("si-{days_ago}"),
            product_id: "prod-001".to_string(),
            product_name: product.to_string(),
            quantity: 10,
            unit: "pc".to_string(),
            date: Utc::now() - Duration::days(days_ago),
            received_by: "John Doe".to_string(),
            supplier_name: Some("Tech Supplies Inc.".to_string()),
            supplier_invoice: Some("INV-12345".to_string()),
            notes: None,
            status,
        }
    }

    #[test]
    fn test_pagination_slice() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(Pagination::new(1, 10).slice(&items), (1..=10).collect::<Vec<_>>());
        assert_eq!(Pagination::new(3, 10).slice(&items), (21..=25).collect::<Vec<_>>());
        assert!(Pagination::new(4, 10).slice(&items).is_empty());
    }

    #[test]
    fn test_pagination_validation() {
        assert!(Pagination::new(0, 10).validate().is_err());
        assert!(Pagination::new(1, 0).validate().is_err());
        assert!(Pagination::default().validate().is_ok());
    }

    #[test]
    fn test_page_count() {
        let page = Page::<u32>::new(vec![], 25);
        assert_eq!(page.page_count(10), 3);
        assert_eq!(page.page_count(25), 1);
        assert_eq!(Page::<u32>::new(vec![], 0).page_count(10), 0);
    }

    #[test]
    fn test_status_filter() {
        let query = StockQuery {
            status: Some(StockStatus::Pending),
            ..StockQuery::default()
        };
        assert!(query.matches(&record(0, StockStatus::Pending, "Laptop")));
        assert!(!query.matches(&record(0, StockStatus::Completed, "Laptop")));
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let now = Utc::now();
        let query = StockQuery {
            start_date: Some(now - Duration::days(5)),
            end_date: Some(now),
            ..StockQuery::default()
        };
        assert!(query.matches(&record(3, StockStatus::Pending, "Laptop")));
        assert!(!query.matches(&record(7, StockStatus::Pending, "Laptop")));
    }

    #[test]
    fn test_search_filter_is_case_insensitive() {
        let query = StockQuery {
            search: Some("laptop".to_string()),
            ..StockQuery::default()
        };
        assert!(query.matches(&record(0, StockStatus::Pending, "Laptop")));

        let query = StockQuery {
            search: Some("inv-123".to_string()),
            ..StockQuery::default()
        };
        assert!(query.matches(&record(0, StockStatus::Pending, "Laptop")));

        let query = StockQuery {
            search: Some("missing".to_string()),
            ..StockQuery::default()
        };
        assert!(!query.matches(&record(0, StockStatus::Pending, "Laptop")));
    }

    #[test]
    fn test_inventory_sort() {
        let mut items = vec![
            inventory_item("Desk", "FRN-002", 10),
            inventory_item("Laptop", "LPT-001", 25),
            inventory_item("Chair", "FRN-001", 15),
        ];
        let query = InventoryQuery {
            sort_by: Some("quantity".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..InventoryQuery::default()
        };
        query.apply_sort(&mut items);
        assert_eq!(items[0].name, "Laptop");
        assert_eq!(items[2].name, "Desk");
    }

    #[test]
    fn test_inventory_category_and_search() {
        let item = inventory_item("Laptop", "LPT-001", 25);
        let query = InventoryQuery {
            category: Some("electronics".to_string()),
            search: Some("lpt".to_string()),
            ..InventoryQuery::default()
        };
        assert!(query.matches(&item));

        let query = InventoryQuery {
            category: Some("Furniture".to_string()),
            ..InventoryQuery::default()
        };
        assert!(!query.matches(&item));
    }

    fn inventory_item(name: &str, sku: &str, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: format!("inv-{sku}"),
            product_id: format!("prod-{sku}"),
            name: name.to_string(),
            sku: sku.to_string(),
            category: "Electronics".to_string(),
            quantity,
            unit: "pc".to_string(),
            reorder_level: 5,
            last_updated: Utc::now(),
        }
    }
}
