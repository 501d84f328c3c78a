//! Custom actions for the Inventory actor.
//!
//! Stock changes that must be checked and applied in one step run inside the actor as
//! actions, so no other message can observe the quantity between the check and the write.
//! They are handled by [`ActorEntity::handle_action`](stockroom_framework::ActorEntity::handle_action)
//! in [`super::entity`].

/// Custom actions for inventory items.
#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Reports the current quantity without modifying it.
    CheckStock,
    /// Removes the given quantity.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` and leaves the item untouched if the quantity on hand
    /// is smaller than requested.
    Deduct(u32),
    /// Adds the given quantity back.
    Restock(u32),
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// Quantity on hand
    CheckStock(u32),
    /// Quantity remaining after the deduction
    Deduct(u32),
    /// Quantity after restocking
    Restock(u32),
}
