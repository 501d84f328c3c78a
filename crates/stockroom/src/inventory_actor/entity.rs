//! `ActorEntity` implementation for [`InventoryItem`].
//!
//! Every accepted create, update and stock action re-stamps `last_updated`.

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::model::{InventoryItem, ItemCreate, ItemId, ItemUpdate};
use async_trait::async_trait;
use chrono::Utc;
use stockroom_framework::ActorEntity;

fn require(field: &str, value: &str) -> Result<(), InventoryError> {
    if value.trim().is_empty() {
        return Err(InventoryError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, Self::Error> {
        require("name", &params.name)?;
        require("location", &params.location)?;
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            quantity: params.quantity,
            min_stock: params.min_stock,
            location: params.location,
            unit: params.unit,
            description: params.description,
            last_updated: Utc::now(),
        })
    }

    /// Applies the patch field by field. Blank names or locations are refused.
    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            require("name", &name)?;
            self.name = name;
        }
        if let Some(location) = update.location {
            require("location", &location)?;
            self.location = location;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(min_stock) = update.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.last_updated = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<InventoryActionResult, Self::Error> {
        match action {
            InventoryAction::CheckStock => Ok(InventoryActionResult::CheckStock(self.quantity)),
            InventoryAction::Deduct(requested) => {
                if self.quantity < requested {
                    return Err(InventoryError::InsufficientStock {
                        requested,
                        available: self.quantity,
                    });
                }
                self.quantity -= requested;
                self.last_updated = Utc::now();
                Ok(InventoryActionResult::Deduct(self.quantity))
            }
            InventoryAction::Restock(amount) => {
                self.quantity = self.quantity.saturating_add(amount);
                self.last_updated = Utc::now();
                Ok(InventoryActionResult::Restock(self.quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Unit};

    fn create() -> ItemCreate {
        ItemCreate {
            name: "Glue sticks".into(),
            category: Category::OfficeSupplies,
            quantity: 12,
            min_stock: 4,
            location: "Cabinet B".into(),
            unit: Unit::Pieces,
            description: None,
        }
    }

    #[test]
    fn blank_name_or_location_is_rejected() {
        let err = InventoryItem::from_create_params(
            ItemId(1),
            ItemCreate {
                name: "  ".into(),
                ..create()
            },
        )
        .unwrap_err();
        assert_eq!(err, InventoryError::Validation("name is required".into()));

        let err = InventoryItem::from_create_params(
            ItemId(1),
            ItemCreate {
                location: String::new(),
                ..create()
            },
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(msg) if msg.contains("location")));
    }

    #[tokio::test]
    async fn deduct_exact_quantity_empties_the_shelf() {
        let mut item = InventoryItem::from_create_params(ItemId(1), create()).unwrap();
        let result = item.handle_action(InventoryAction::Deduct(12), &()).await;
        assert_eq!(result, Ok(InventoryActionResult::Deduct(0)));
        assert_eq!(item.quantity, 0);
    }

    #[tokio::test]
    async fn deduct_more_than_available_fails_without_change() {
        let mut item = InventoryItem::from_create_params(ItemId(1), create()).unwrap();
        let stamp = item.last_updated;
        let result = item.handle_action(InventoryAction::Deduct(13), &()).await;
        assert_eq!(
            result,
            Err(InventoryError::InsufficientStock {
                requested: 13,
                available: 12
            })
        );
        assert_eq!(item.quantity, 12);
        assert_eq!(item.last_updated, stamp);
    }

    #[tokio::test]
    async fn update_restamps_and_keeps_id() {
        let mut item = InventoryItem::from_create_params(ItemId(7), create()).unwrap();
        let before = item.last_updated;
        let patch = ItemUpdate {
            quantity: Some(30),
            description: Some(Some("Washable".into())),
            ..Default::default()
        };
        item.on_update(patch, &()).await.unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.quantity, 30);
        assert_eq!(item.description.as_deref(), Some("Washable"));
        assert!(item.last_updated >= before);
    }

    #[tokio::test]
    async fn update_can_clear_description() {
        let mut item = InventoryItem::from_create_params(
            ItemId(2),
            ItemCreate {
                description: Some("Acid free".into()),
                ..create()
            },
        )
        .unwrap();

        let keep = ItemUpdate {
            quantity: Some(3),
            ..Default::default()
        };
        item.on_update(keep, &()).await.unwrap();
        assert_eq!(item.description.as_deref(), Some("Acid free"));

        let clear = ItemUpdate {
            description: Some(None),
            ..Default::default()
        };
        item.on_update(clear, &()).await.unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.quantity, 3);
    }
}
