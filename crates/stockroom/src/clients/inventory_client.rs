//! # Inventory Client
//!
//! Provides a high‑level API for interacting with the `InventoryItem` actor.
//! It wraps a `ResourceClient<InventoryItem>` and exposes domain‑specific methods.
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{Category, InventoryItem, ItemCreate, ItemId, ItemUpdate};
use async_trait::async_trait;
use stockroom_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            other => other
                .downcast_entity::<InventoryError>()
                .unwrap_or_else(|e| InventoryError::ActorCommunicationError(e.to_string())),
        }
    }

    fn not_found(id: &ItemId) -> Self::Error {
        InventoryError::NotFound(id.to_string())
    }
}

impl InventoryClient {
    /// Every item, in catalog order (newest additions first).
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, params: ItemCreate) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies the patch and re-stamps `last_updated`.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ItemId,
        update: ItemUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn by_category(
        &self,
        category: Category,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        let mut items = self.list().await?;
        items.retain(|item| item.category == category);
        Ok(items)
    }

    /// Items at or below their minimum, zero-quantity items included.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let mut items = self.list().await?;
        items.retain(InventoryItem::is_low_stock);
        Ok(items)
    }

    /// Quantity currently on hand.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ItemId) -> Result<u32, InventoryError> {
        debug!("Checking stock for {}", id);
        match self
            .inner
            .perform_action(id, InventoryAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected("CheckStock", &other)),
        }
    }

    /// Removes `quantity` units and returns what is left.
    ///
    /// Fails with `InsufficientStock` and changes nothing if fewer units are on hand.
    #[instrument(skip(self))]
    pub async fn deduct_stock(&self, id: ItemId, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Deducting {} units from {}", quantity, id);
        match self
            .inner
            .perform_action(id, InventoryAction::Deduct(quantity))
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Deduct(remaining) => Ok(remaining),
            other => Err(unexpected("Deduct", &other)),
        }
    }

    /// Adds `quantity` units back and returns the new level.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ItemId, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Restocking {} units of {}", quantity, id);
        match self
            .inner
            .perform_action(id, InventoryAction::Restock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Restock(level) => Ok(level),
            other => Err(unexpected("Restock", &other)),
        }
    }
}

fn unexpected(action: &str, result: &InventoryActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!(
        "{action} answered with mismatched result {result:?}"
    ))
}
