//! # Request Actor
//!
//! Owns the supply requests and is the only place their status changes.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](stockroom_framework::ActorEntity) implementation for [`Request`]
//! - [`error`] - [`RequestError`]
//! - [`actions`] - [`RequestAction::Transition`] for lifecycle moves
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is an [`InventoryClient`](crate::clients::InventoryClient): `on_create` refuses requests for items
//! the inventory does not hold. The client is injected when the loop starts:
//!
//! ```rust,ignore
//! let (inventory_actor, inventory) = inventory_actor::new(32);
//! let (request_actor, requests) = request_actor::new(32);
//!
//! tokio::spawn(inventory_actor.run(()));
//! tokio::spawn(request_actor.run(inventory.clone()));
//! ```
//!
//! Stock is never touched here. Deducting on fulfillment is the job of
//! [`FulfillmentWorkflow`](crate::workflow::FulfillmentWorkflow).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RequestClient;
use crate::model::Request;
use stockroom_framework::ResourceActor;

/// Creates a new Request actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Request>, RequestClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RequestClient::new(generic_client))
}
