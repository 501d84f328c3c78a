//! Dashboard landing-page snapshot.

use crate::model::{InventoryItem, Request, RequestStatus, User};
use serde::{Deserialize, Serialize};

/// Rows shown in the recent-requests and low-stock panels.
pub const PANEL_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_items: usize,
    pub low_stock_items: usize,
    pub pending_requests: usize,
    pub total_users: usize,
    /// First rows of `requests` as given; pass the output of `RequestClient::get_all`
    /// for newest first.
    pub recent_requests: Vec<Request>,
    /// First low-stock items in catalog order.
    pub low_stock: Vec<InventoryItem>,
}

impl DashboardSnapshot {
    pub fn build(items: &[InventoryItem], requests: &[Request], users: &[User]) -> Self {
        let low_stock: Vec<&InventoryItem> =
            items.iter().filter(|item| item.is_low_stock()).collect();

        Self {
            total_items: items.len(),
            low_stock_items: low_stock.len(),
            pending_requests: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count(),
            total_users: users.len(),
            recent_requests: requests.iter().take(PANEL_ROWS).cloned().collect(),
            low_stock: low_stock.into_iter().take(PANEL_ROWS).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, RequestId};
    use crate::seed::SeedData;

    #[test]
    fn panels_are_capped() {
        let seed = SeedData::bundled().unwrap();
        let snapshot = DashboardSnapshot::build(&seed.items, &seed.requests, &seed.users);

        assert_eq!(snapshot.total_items, 8);
        assert_eq!(snapshot.low_stock_items, 4);
        assert_eq!(snapshot.pending_requests, 2);
        assert_eq!(snapshot.total_users, 4);

        let recent: Vec<RequestId> = snapshot.recent_requests.iter().map(|r| r.id).collect();
        assert_eq!(recent, [1, 2, 3, 4, 5].map(RequestId).to_vec());
        let low: Vec<ItemId> = snapshot.low_stock.iter().map(|i| i.id).collect();
        assert_eq!(low, [1, 3, 6, 8].map(ItemId).to_vec());
    }

    #[test]
    fn empty_collections() {
        let snapshot = DashboardSnapshot::build(&[], &[], &[]);
        assert_eq!(snapshot.total_items, 0);
        assert!(snapshot.recent_requests.is_empty());
        assert!(snapshot.low_stock.is_empty());
    }
}
