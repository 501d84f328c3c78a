//! Inventory items and their stock classification.
//!
//! An [`InventoryItem`] implements the [`ActorEntity`](stockroom_framework::ActorEntity)
//! trait, see [`crate::inventory_actor::entity`] for the hooks:
//! - Creation parameters ([`ItemCreate`])
//! - Update parameters ([`ItemUpdate`])
//! - Custom actions ([`InventoryAction`](crate::inventory_actor::InventoryAction))
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    #[serde(rename = "Teaching Materials")]
    TeachingMaterials,
    Technology,
    Furniture,
    Maintenance,
    #[serde(rename = "Sports Equipment")]
    SportsEquipment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::OfficeSupplies,
        Category::TeachingMaterials,
        Category::Technology,
        Category::Furniture,
        Category::Maintenance,
        Category::SportsEquipment,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::OfficeSupplies => "Office Supplies",
            Category::TeachingMaterials => "Teaching Materials",
            Category::Technology => "Technology",
            Category::Furniture => "Furniture",
            Category::Maintenance => "Maintenance",
            Category::SportsEquipment => "Sports Equipment",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit label shown next to a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pieces,
    Boxes,
    Reams,
    Sets,
    Units,
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Unit::Pieces => "pieces",
            Unit::Boxes => "boxes",
            Unit::Reams => "reams",
            Unit::Sets => "sets",
            Unit::Units => "units",
        };
        f.write_str(label)
    }
}

/// Three-way stock classification used by the inventory filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockLevel {
    /// Quantity is zero.
    OutOfStock,
    /// Above zero but at or below the minimum.
    LowStock,
    /// Above the minimum.
    InStock,
}

/// Four-step badge shown next to an item: out, low, medium (up to twice the minimum), good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockHealth {
    Out,
    Low,
    Medium,
    Good,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub min_stock: u32,
    pub location: String,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// At or below the minimum threshold. Zero-quantity items count as low.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    pub fn stock_level(&self) -> StockLevel {
        if self.quantity == 0 {
            StockLevel::OutOfStock
        } else if self.quantity <= self.min_stock {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }

    pub fn stock_health(&self) -> StockHealth {
        if self.quantity == 0 {
            StockHealth::Out
        } else if self.quantity <= self.min_stock {
            StockHealth::Low
        } else if u64::from(self.quantity) <= u64::from(self.min_stock) * 2 {
            StockHealth::Medium
        } else {
            StockHealth::Good
        }
    }
}

/// Payload for adding an item to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreate {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub min_stock: u32,
    pub location: String,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub description: Option<String>,
}

/// Patch for an existing item. `None` leaves the field as it is; `description: Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<u32>,
    pub min_stock: Option<u32>,
    pub location: Option<String>,
    pub unit: Option<Unit>,
    #[serde(
        default,
        deserialize_with = "super::clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}
