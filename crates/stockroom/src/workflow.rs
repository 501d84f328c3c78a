//! # Request Fulfillment Workflow
//!
//! Status changes that touch more than one collection. Approving or rejecting a request is
//! a single transition; fulfilling it also takes the requested quantity out of stock.
//!
//! The two steps of a fulfillment are separate messages to separate actors, so they are
//! not atomic together. [`FulfillmentPolicy`] decides their order and what happens when the
//! shelf cannot cover the request:
//!
//! | Policy | Order | Stock short |
//! |--------|-------|-------------|
//! | [`AdvanceRegardless`](FulfillmentPolicy::AdvanceRegardless) (default) | transition, then deduct | request fulfilled, stock untouched, reported in the outcome |
//! | [`RequireStock`](FulfillmentPolicy::RequireStock) | deduct, then transition | fails, nothing changes |
//!
//! Under `AdvanceRegardless` the transition is already committed when the deduction runs,
//! so every deduction failure after it is returned as a [`StockOutcome`] rather than an
//! error. Callers always learn the request's new status.
//!
//! ```rust,ignore
//! let workflow = system.workflow();
//! workflow.approve(id).await?;
//! let outcome = workflow.fulfill(id).await?;
//! if let StockOutcome::Insufficient { available, .. } = outcome.stock {
//!     warn!(available, "fulfilled without stock");
//! }
//! ```

use crate::clients::{InventoryClient, RequestClient};
use crate::inventory_actor::InventoryError;
use crate::model::{ItemId, Request, RequestId, RequestStatus};
use crate::request_actor::RequestError;
use serde::{Deserialize, Serialize};
use stockroom_framework::ActorClient;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// How `fulfill` treats the stock decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentPolicy {
    /// Mark the request fulfilled, then deduct if the shelf covers it.
    #[default]
    AdvanceRegardless,
    /// Deduct first and only fulfill an approved request whose stock was taken.
    RequireStock,
}

/// What happened to the stock during a fulfillment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockOutcome {
    Deducted {
        item_id: ItemId,
        remaining: u32,
    },
    /// The shelf held fewer units than requested; nothing was deducted.
    Insufficient {
        item_id: ItemId,
        requested: u32,
        available: u32,
    },
    /// The item was deleted after the request was filed.
    ItemMissing { item_id: ItemId },
    /// The inventory service could not be reached or answered unexpectedly; nothing was
    /// deducted.
    DeductionFailed { item_id: ItemId, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FulfillmentOutcome {
    pub request: Request,
    pub stock: StockOutcome,
}

/// Result of [`FulfillmentWorkflow::change_status`].
#[derive(Debug, Clone, PartialEq)]
pub enum StatusChange {
    /// Approved or rejected.
    Moved(Request),
    Fulfilled(FulfillmentOutcome),
}

impl StatusChange {
    pub fn request(&self) -> &Request {
        match self {
            StatusChange::Moved(request) => request,
            StatusChange::Fulfilled(outcome) => &outcome.request,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Coordinates the request and inventory services.
#[derive(Clone)]
pub struct FulfillmentWorkflow {
    requests: RequestClient,
    inventory: InventoryClient,
    policy: FulfillmentPolicy,
}

impl FulfillmentWorkflow {
    pub fn new(
        requests: RequestClient,
        inventory: InventoryClient,
        policy: FulfillmentPolicy,
    ) -> Self {
        Self {
            requests,
            inventory,
            policy,
        }
    }

    pub fn policy(&self) -> FulfillmentPolicy {
        self.policy
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: RequestId) -> Result<Request, WorkflowError> {
        let request = self.requests.transition(id, RequestStatus::Approved).await?;
        info!(%id, "Request approved");
        Ok(request)
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: RequestId) -> Result<Request, WorkflowError> {
        let request = self.requests.transition(id, RequestStatus::Rejected).await?;
        info!(%id, "Request rejected");
        Ok(request)
    }

    /// Fulfills an approved request according to the configured policy.
    #[instrument(skip(self), fields(policy = ?self.policy))]
    pub async fn fulfill(&self, id: RequestId) -> Result<FulfillmentOutcome, WorkflowError> {
        let outcome = match self.policy {
            FulfillmentPolicy::AdvanceRegardless => self.advance_then_deduct(id).await?,
            FulfillmentPolicy::RequireStock => self.deduct_then_advance(id).await?,
        };
        match &outcome.stock {
            StockOutcome::Deducted { item_id, remaining } => {
                info!(%id, %item_id, remaining, "Request fulfilled")
            }
            StockOutcome::Insufficient {
                item_id,
                requested,
                available,
            } => warn!(%id, %item_id, requested, available, "Fulfilled without deducting stock"),
            StockOutcome::ItemMissing { item_id } => {
                warn!(%id, %item_id, "Fulfilled but item no longer exists")
            }
            StockOutcome::DeductionFailed { item_id, reason } => {
                error!(%id, %item_id, %reason, "Fulfilled but stock deduction failed")
            }
        }
        Ok(outcome)
    }

    /// Dispatches to `approve`, `reject` or `fulfill`. Any other target is refused by the
    /// request lifecycle.
    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: RequestId,
        target: RequestStatus,
    ) -> Result<StatusChange, WorkflowError> {
        match target {
            RequestStatus::Approved => self.approve(id).await.map(StatusChange::Moved),
            RequestStatus::Rejected => self.reject(id).await.map(StatusChange::Moved),
            RequestStatus::Fulfilled => self.fulfill(id).await.map(StatusChange::Fulfilled),
            RequestStatus::Pending => Ok(StatusChange::Moved(
                self.requests.transition(id, target).await?,
            )),
        }
    }

    async fn advance_then_deduct(&self, id: RequestId) -> Result<FulfillmentOutcome, WorkflowError> {
        let request = self.requests.transition(id, RequestStatus::Fulfilled).await?;
        let item_id = request.item_id;

        let stock = match self.inventory.deduct_stock(item_id, request.quantity).await {
            Ok(remaining) => StockOutcome::Deducted { item_id, remaining },
            Err(InventoryError::InsufficientStock {
                requested,
                available,
            }) => StockOutcome::Insufficient {
                item_id,
                requested,
                available,
            },
            Err(InventoryError::NotFound(_)) => StockOutcome::ItemMissing { item_id },
            Err(e) => StockOutcome::DeductionFailed {
                item_id,
                reason: e.to_string(),
            },
        };
        Ok(FulfillmentOutcome { request, stock })
    }

    async fn deduct_then_advance(&self, id: RequestId) -> Result<FulfillmentOutcome, WorkflowError> {
        let request = self.requests.get(id).await?;
        if request.status != RequestStatus::Approved {
            return Err(RequestError::InvalidTransition {
                from: request.status,
                to: RequestStatus::Fulfilled,
            }
            .into());
        }

        let item_id = request.item_id;
        let remaining = self.inventory.deduct_stock(item_id, request.quantity).await?;

        match self.requests.transition(id, RequestStatus::Fulfilled).await {
            Ok(request) => Ok(FulfillmentOutcome {
                request,
                stock: StockOutcome::Deducted { item_id, remaining },
            }),
            Err(e) => {
                // Another caller moved the request in between; put the stock back.
                warn!(%id, %item_id, error = %e, "Transition failed after deduction, restocking");
                self.inventory.restock(item_id, request.quantity).await?;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory_actor::InventoryActionResult;
    use crate::model::{InventoryItem, Priority};
    use crate::request_actor::RequestActionResult;
    use chrono::Utc;
    use stockroom_framework::mock::MockClient;
    use stockroom_framework::FrameworkError;

    fn request(status: RequestStatus, quantity: u32) -> Request {
        Request {
            id: RequestId(1),
            item_id: ItemId(1),
            requested_by: "Ms. Rivera".into(),
            quantity,
            priority: Priority::High,
            status,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn workflow(
        requests: &MockClient<Request>,
        inventory: &MockClient<InventoryItem>,
        policy: FulfillmentPolicy,
    ) -> FulfillmentWorkflow {
        FulfillmentWorkflow::new(
            RequestClient::new(requests.client()),
            InventoryClient::new(inventory.client()),
            policy,
        )
    }

    fn insufficient(requested: u32, available: u32) -> FrameworkError {
        FrameworkError::EntityError(Box::new(InventoryError::InsufficientStock {
            requested,
            available,
        }))
    }

    #[tokio::test]
    async fn advance_regardless_reports_short_stock() {
        let mut requests = MockClient::<Request>::new();
        let mut inventory = MockClient::<InventoryItem>::new();
        requests
            .expect_action(RequestId(1))
            .return_ok(RequestActionResult::Transition(request(
                RequestStatus::Fulfilled,
                8,
            )));
        inventory.expect_action(ItemId(1)).return_err(insufficient(8, 5));

        let outcome = workflow(&requests, &inventory, FulfillmentPolicy::AdvanceRegardless)
            .fulfill(RequestId(1))
            .await
            .unwrap();

        assert_eq!(outcome.request.status, RequestStatus::Fulfilled);
        assert_eq!(
            outcome.stock,
            StockOutcome::Insufficient {
                item_id: ItemId(1),
                requested: 8,
                available: 5
            }
        );
        requests.verify();
        inventory.verify();
    }

    #[tokio::test]
    async fn advance_regardless_tolerates_deleted_item() {
        let mut requests = MockClient::<Request>::new();
        let mut inventory = MockClient::<InventoryItem>::new();
        requests
            .expect_action(RequestId(1))
            .return_ok(RequestActionResult::Transition(request(
                RequestStatus::Fulfilled,
                2,
            )));
        inventory
            .expect_action(ItemId(1))
            .return_err(FrameworkError::NotFound("item_1".into()));

        let outcome = workflow(&requests, &inventory, FulfillmentPolicy::AdvanceRegardless)
            .fulfill(RequestId(1))
            .await
            .unwrap();
        assert_eq!(outcome.stock, StockOutcome::ItemMissing { item_id: ItemId(1) });
    }

    #[tokio::test]
    async fn advance_regardless_reports_unreachable_inventory() {
        let mut requests = MockClient::<Request>::new();
        let mut inventory = MockClient::<InventoryItem>::new();
        requests
            .expect_action(RequestId(1))
            .return_ok(RequestActionResult::Transition(request(
                RequestStatus::Fulfilled,
                3,
            )));
        inventory
            .expect_action(ItemId(1))
            .return_err(FrameworkError::ActorClosed);

        let outcome = workflow(&requests, &inventory, FulfillmentPolicy::AdvanceRegardless)
            .fulfill(RequestId(1))
            .await
            .unwrap();

        // The committed status comes back alongside the failed deduction.
        assert_eq!(outcome.request.status, RequestStatus::Fulfilled);
        match outcome.stock {
            StockOutcome::DeductionFailed { item_id, reason } => {
                assert_eq!(item_id, ItemId(1));
                assert!(reason.contains("Actor closed"), "{reason}");
            }
            other => panic!("expected a failed deduction, got {other:?}"),
        }
        requests.verify();
        inventory.verify();
    }

    #[tokio::test]
    async fn require_stock_refuses_short_stock_without_transition() {
        let mut requests = MockClient::<Request>::new();
        let mut inventory = MockClient::<InventoryItem>::new();
        requests
            .expect_get(RequestId(1))
            .return_ok(Some(request(RequestStatus::Approved, 8)));
        inventory.expect_action(ItemId(1)).return_err(insufficient(8, 5));

        let err = workflow(&requests, &inventory, FulfillmentPolicy::RequireStock)
            .fulfill(RequestId(1))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Inventory(InventoryError::InsufficientStock {
                requested: 8,
                available: 5
            })
        );
        // No transition was queued.
        requests.verify();
        inventory.verify();
    }

    #[tokio::test]
    async fn require_stock_needs_an_approved_request() {
        let mut requests = MockClient::<Request>::new();
        let inventory = MockClient::<InventoryItem>::new();
        requests
            .expect_get(RequestId(1))
            .return_ok(Some(request(RequestStatus::Pending, 1)));

        let err = workflow(&requests, &inventory, FulfillmentPolicy::RequireStock)
            .fulfill(RequestId(1))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Request(RequestError::InvalidTransition {
                from: RequestStatus::Pending,
                to: RequestStatus::Fulfilled
            })
        );
    }

    #[tokio::test]
    async fn require_stock_restocks_when_transition_fails() {
        let mut requests = MockClient::<Request>::new();
        let mut inventory = MockClient::<InventoryItem>::new();
        requests
            .expect_get(RequestId(1))
            .return_ok(Some(request(RequestStatus::Approved, 3)));
        inventory
            .expect_action(ItemId(1))
            .return_ok(InventoryActionResult::Deduct(2));
        requests.expect_action(RequestId(1)).return_err(FrameworkError::EntityError(
            Box::new(RequestError::InvalidTransition {
                from: RequestStatus::Rejected,
                to: RequestStatus::Fulfilled,
            }),
        ));
        inventory
            .expect_action(ItemId(1))
            .return_ok(InventoryActionResult::Restock(5));

        let err = workflow(&requests, &inventory, FulfillmentPolicy::RequireStock)
            .fulfill(RequestId(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Request(RequestError::InvalidTransition { .. })
        ));
        requests.verify();
        inventory.verify();
    }
}
