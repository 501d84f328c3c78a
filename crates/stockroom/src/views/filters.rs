//! Filters and sort orders for the inventory and request lists.
//!
//! ```rust,ignore
//! let filter = InventoryFilter {
//!     search: Some("paper".into()),
//!     stock_level: Some(StockLevel::LowStock),
//!     ..Default::default()
//! };
//! let mut rows = filter.apply(&items);
//! sort_items(&mut rows, InventorySortKey::Quantity, SortOrder::Descending);
//! ```

use crate::model::{Category, InventoryItem, Priority, Request, RequestStatus, StockLevel};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Inventory list filter. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    /// Case-insensitive substring of the name, category label or description.
    pub search: Option<String>,
    pub category: Option<Category>,
    pub stock_level: Option<StockLevel>,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = item.name.to_lowercase().contains(&term)
                || item.category.label().to_lowercase().contains(&term)
                || item
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }
        if self.stock_level.is_some_and(|level| level != item.stock_level()) {
            return false;
        }
        true
    }

    /// Matching items, in the order given.
    pub fn apply(&self, items: &[InventoryItem]) -> Vec<InventoryItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventorySortKey {
    #[default]
    Name,
    Category,
    Quantity,
    MinStock,
    Location,
    LastUpdated,
}

/// Stable sort; text keys ignore case.
pub fn sort_items(items: &mut [InventoryItem], key: InventorySortKey, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = match key {
            InventorySortKey::Name => cmp_ignore_case(&a.name, &b.name),
            InventorySortKey::Category => cmp_ignore_case(a.category.label(), b.category.label()),
            InventorySortKey::Quantity => a.quantity.cmp(&b.quantity),
            InventorySortKey::MinStock => a.min_stock.cmp(&b.min_stock),
            InventorySortKey::Location => cmp_ignore_case(&a.location, &b.location),
            InventorySortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
        };
        order.apply(ordering)
    });
}

/// Request list filter. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub priority: Option<Priority>,
}

impl RequestFilter {
    pub fn matches(&self, request: &Request) -> bool {
        self.status.map_or(true, |s| s == request.status)
            && self.priority.map_or(true, |p| p == request.priority)
    }

    pub fn apply(&self, requests: &[Request]) -> Vec<Request> {
        requests.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestSortKey {
    #[default]
    CreatedAt,
    /// By urgency, `low < medium < high`.
    Priority,
    Quantity,
    Requester,
    /// By lifecycle position, `pending < approved < rejected < fulfilled`.
    Status,
}

/// Stable sort; the requester name ignores case.
pub fn sort_requests(requests: &mut [Request], key: RequestSortKey, order: SortOrder) {
    requests.sort_by(|a, b| {
        let ordering = match key {
            RequestSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            RequestSortKey::Priority => a.priority.cmp(&b.priority),
            RequestSortKey::Quantity => a.quantity.cmp(&b.quantity),
            RequestSortKey::Requester => cmp_ignore_case(&a.requested_by, &b.requested_by),
            RequestSortKey::Status => a.status.cmp(&b.status),
        };
        order.apply(ordering)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, RequestId, Unit};
    use chrono::{Duration, TimeZone, Utc};

    fn item(id: u32, name: &str, category: Category, quantity: u32, min_stock: u32) -> InventoryItem {
        InventoryItem {
            id: ItemId(id),
            name: name.into(),
            category,
            quantity,
            min_stock,
            location: format!("Shelf {id}"),
            unit: Unit::Pieces,
            description: None,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(id.into()),
        }
    }

    fn catalog() -> Vec<InventoryItem> {
        let mut projector = item(3, "Projector bulb", Category::Technology, 0, 2);
        projector.description = Some("Replacement lamp for ceiling PAPER screens".into());
        vec![
            item(1, "Copy paper", Category::OfficeSupplies, 5, 10),
            item(2, "basketball", Category::SportsEquipment, 0, 4),
            projector,
            item(4, "Desk", Category::Furniture, 12, 3),
        ]
    }

    fn ids(items: &[InventoryItem]) -> Vec<u32> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn search_matches_name_category_and_description() {
        let items = catalog();
        let by_text = |term: &str| {
            InventoryFilter {
                search: Some(term.into()),
                ..Default::default()
            }
            .apply(&items)
        };
        assert_eq!(ids(&by_text("PAPER")), vec![1, 3]);
        assert_eq!(ids(&by_text("sports")), vec![2]);
        assert_eq!(ids(&by_text("   ")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn out_of_stock_filter_ignores_category() {
        let filter = InventoryFilter {
            stock_level: Some(StockLevel::OutOfStock),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![2, 3]);
    }

    #[test]
    fn filters_combine() {
        let filter = InventoryFilter {
            search: Some("p".into()),
            category: Some(Category::OfficeSupplies),
            stock_level: Some(StockLevel::LowStock),
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![1]);
    }

    #[test]
    fn name_sort_ignores_case_and_reverses() {
        let mut items = catalog();
        sort_items(&mut items, InventorySortKey::Name, SortOrder::Ascending);
        assert_eq!(ids(&items), vec![2, 1, 4, 3]);
        sort_items(&mut items, InventorySortKey::Name, SortOrder::Descending);
        assert_eq!(ids(&items), vec![3, 4, 1, 2]);
    }

    #[test]
    fn quantity_sort_is_stable() {
        let mut items = catalog();
        sort_items(&mut items, InventorySortKey::Quantity, SortOrder::Ascending);
        assert_eq!(ids(&items), vec![2, 3, 1, 4]);
    }

    fn request(id: u32, status: RequestStatus, priority: Priority, by: &str) -> Request {
        Request {
            id: RequestId(id),
            item_id: ItemId(1),
            requested_by: by.into(),
            quantity: id,
            priority,
            status,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 2, id, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn request_filter_and_priority_sort() {
        let requests = vec![
            request(1, RequestStatus::Pending, Priority::Low, "zoe"),
            request(2, RequestStatus::Approved, Priority::High, "Adam"),
            request(3, RequestStatus::Pending, Priority::High, "beth"),
        ];

        let pending = RequestFilter {
            status: Some(RequestStatus::Pending),
            priority: None,
        }
        .apply(&requests);
        assert_eq!(pending.len(), 2);

        let mut sorted = requests.clone();
        sort_requests(&mut sorted, RequestSortKey::Priority, SortOrder::Descending);
        let order: Vec<u32> = sorted.iter().map(|r| r.id.0).collect();
        assert_eq!(order, vec![2, 3, 1]);

        sort_requests(&mut sorted, RequestSortKey::Requester, SortOrder::Ascending);
        let order: Vec<u32> = sorted.iter().map(|r| r.id.0).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
