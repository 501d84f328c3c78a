//! `ActorEntity` implementation for [`Request`].
//!
//! Creation is validated twice: synchronously for the payload itself, then in `on_create`
//! against the inventory, which must still hold the referenced item.

use super::actions::{RequestAction, RequestActionResult};
use super::error::RequestError;
use crate::clients::InventoryClient;
use crate::inventory_actor::InventoryError;
use crate::model::{Request, RequestCreate, RequestId, RequestStatus, RequestUpdate};
use async_trait::async_trait;
use chrono::Utc;
use stockroom_framework::{ActorClient, ActorEntity};
use tracing::debug;

fn validate_quantity(quantity: u32) -> Result<(), RequestError> {
    if quantity == 0 {
        return Err(RequestError::InvalidQuantity(quantity));
    }
    Ok(())
}

fn validate_requester(name: &str) -> Result<(), RequestError> {
    if name.trim().is_empty() {
        return Err(RequestError::Validation("requestedBy is required".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Request {
    type Id = RequestId;
    type Create = RequestCreate;
    type Update = RequestUpdate;
    type Action = RequestAction;
    type ActionResult = RequestActionResult;
    type Context = InventoryClient;
    type Error = RequestError;

    fn id(&self) -> &RequestId {
        &self.id
    }

    /// New requests always start `pending`, stamped with the current time.
    fn from_create_params(id: RequestId, params: RequestCreate) -> Result<Self, Self::Error> {
        validate_quantity(params.quantity)?;
        validate_requester(&params.requested_by)?;
        Ok(Self {
            id,
            item_id: params.item_id,
            requested_by: params.requested_by,
            quantity: params.quantity,
            priority: params.priority,
            status: RequestStatus::Pending,
            notes: params.notes,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, inventory: &InventoryClient) -> Result<(), Self::Error> {
        match inventory.get(self.item_id).await {
            Ok(item) => {
                debug!(item_id = %item.id, on_hand = item.quantity, "Referenced item exists");
                Ok(())
            }
            Err(InventoryError::NotFound(id)) => Err(RequestError::NotFound(id)),
            Err(e) => Err(RequestError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn on_update(
        &mut self,
        update: RequestUpdate,
        _ctx: &InventoryClient,
    ) -> Result<(), Self::Error> {
        if let Some(requested_by) = update.requested_by {
            validate_requester(&requested_by)?;
            self.requested_by = requested_by;
        }
        if let Some(quantity) = update.quantity {
            validate_quantity(quantity)?;
            self.quantity = quantity;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RequestAction,
        _ctx: &InventoryClient,
    ) -> Result<RequestActionResult, Self::Error> {
        match action {
            RequestAction::Transition(target) => {
                if !self.status.can_transition_to(target) {
                    return Err(RequestError::InvalidTransition {
                        from: self.status,
                        to: target,
                    });
                }
                self.status = target;
                Ok(RequestActionResult::Transition(self.clone()))
            }
        }
    }
}
