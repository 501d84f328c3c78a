//! # Inventory Actor
//!
//! Owns the item catalog and every change to stock quantities.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](stockroom_framework::ActorEntity) implementation for [`InventoryItem`]
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`] for stock changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! let on_hand = inventory.check_stock(ItemId(1)).await?;
//! let remaining = inventory.deduct_stock(ItemId(1), 3).await?;
//! inventory.restock(ItemId(1), 3).await?;
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stockroom::inventory_actor;
//! use stockroom::model::{Category, ItemCreate, Unit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = inventory_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let item = client
//!         .create(ItemCreate {
//!             name: "Chalk".to_string(),
//!             category: Category::TeachingMaterials,
//!             quantity: 20,
//!             min_stock: 5,
//!             location: "Room 12".to_string(),
//!             unit: Unit::Boxes,
//!             description: None,
//!         })
//!         .await?;
//!
//!     assert_eq!(client.deduct_stock(item.id, 4).await?, 16);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::InventoryItem;
use stockroom_framework::ResourceActor;

/// Creates a new Inventory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<InventoryItem>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, InventoryClient::new(generic_client))
}
