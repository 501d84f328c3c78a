//! Reports page summary.

use crate::model::{Category, InventoryItem, Request, RequestStatus};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Tunables for the reports summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Flat value per unit used for the inventory estimate.
    pub unit_value: f64,
    /// Length of the top-categories list.
    pub top_categories: usize,
    /// Calendar months covered by the trend, current month included.
    pub trend_months: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit_value: 10.0,
            top_categories: 5,
            trend_months: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    /// Total units held across the category's items.
    pub quantity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: RequestStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    /// Short label such as `Mar 2024`.
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_items: usize,
    /// Items at or below their minimum, zero-quantity items included.
    pub low_stock_items: usize,
    pub estimated_value: f64,
    pub total_requests: usize,
    pub pending_requests: usize,
    pub fulfilled_requests: usize,
    /// Fulfilled share of all requests as a rounded percentage; 0 when there are none.
    pub fulfillment_rate: u32,
    /// Categories that hold at least one item, in catalog category order.
    pub category_distribution: Vec<CategoryShare>,
    /// Largest categories by quantity, descending.
    pub top_categories: Vec<CategoryShare>,
    /// One entry per status, in lifecycle order.
    pub status_distribution: Vec<StatusCount>,
    /// Oldest month first, ending with the month of `now`.
    pub monthly_trend: Vec<MonthlyCount>,
}

impl ReportSummary {
    pub fn build(
        items: &[InventoryItem],
        requests: &[Request],
        now: DateTime<Utc>,
        config: &ReportConfig,
    ) -> Self {
        let total_units: u64 = items.iter().map(|item| u64::from(item.quantity)).sum();
        let count_status =
            |status: RequestStatus| requests.iter().filter(|r| r.status == status).count();

        let total_requests = requests.len();
        let fulfilled_requests = count_status(RequestStatus::Fulfilled);
        let fulfillment_rate = if total_requests == 0 {
            0
        } else {
            (fulfilled_requests as f64 / total_requests as f64 * 100.0).round() as u32
        };

        let category_distribution = category_distribution(items);
        let mut top_categories = category_distribution.clone();
        top_categories.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top_categories.truncate(config.top_categories);

        let status_distribution = RequestStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: count_status(status),
            })
            .collect();

        Self {
            total_items: items.len(),
            low_stock_items: items.iter().filter(|item| item.is_low_stock()).count(),
            estimated_value: total_units as f64 * config.unit_value,
            total_requests,
            pending_requests: count_status(RequestStatus::Pending),
            fulfilled_requests,
            fulfillment_rate,
            category_distribution,
            top_categories,
            status_distribution,
            monthly_trend: monthly_trend(requests, now, config.trend_months),
        }
    }
}

fn category_distribution(items: &[InventoryItem]) -> Vec<CategoryShare> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let mut members = items
                .iter()
                .filter(|item| item.category == category)
                .peekable();
            members.peek()?;
            Some(CategoryShare {
                category,
                quantity: members.map(|item| u64::from(item.quantity)).sum(),
            })
        })
        .collect()
}

/// The `months` calendar months ending with the month of `now`, oldest first.
fn month_window(now: DateTime<Utc>, months: u32) -> Vec<(i32, u32)> {
    let (mut year, mut month) = (now.year(), now.month());
    let mut window = Vec::with_capacity(months as usize);
    for _ in 0..months {
        window.push((year, month));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    window.reverse();
    window
}

fn monthly_trend(requests: &[Request], now: DateTime<Utc>, months: u32) -> Vec<MonthlyCount> {
    month_window(now, months)
        .into_iter()
        .map(|(year, month)| MonthlyCount {
            year,
            month,
            label: NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_default(),
            count: requests
                .iter()
                .filter(|r| r.created_at.year() == year && r.created_at.month() == month)
                .count(),
        })
        .collect()
}
