//! # Request Client
//!
//! Provides a high‑level API for interacting with the `Request` actor.
//! It wraps a `ResourceClient<Request>` and exposes domain‑specific methods.
use crate::model::{Request, RequestCreate, RequestId, RequestStatus, RequestUpdate};
use crate::request_actor::{RequestAction, RequestActionResult, RequestError};
use async_trait::async_trait;
use stockroom_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Request actor.
#[derive(Clone)]
pub struct RequestClient {
    inner: ResourceClient<Request>,
}

impl RequestClient {
    pub fn new(inner: ResourceClient<Request>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Request> for RequestClient {
    type Error = RequestError;

    fn inner(&self) -> &ResourceClient<Request> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => RequestError::NotFound(id),
            other => other
                .downcast_entity::<RequestError>()
                .unwrap_or_else(|e| RequestError::ActorCommunicationError(e.to_string())),
        }
    }

    fn not_found(id: &RequestId) -> Self::Error {
        RequestError::NotFound(id.to_string())
    }
}

impl RequestClient {
    /// Every request, newest `created_at` first.
    ///
    /// The sort is stable: requests with equal timestamps keep collection order, in which
    /// later creations already come first.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Request>, RequestError> {
        let mut requests = self.list().await?;
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    /// Files a new request. It is stored `pending`, after the inventory confirms the item.
    #[instrument(skip(self))]
    pub async fn create(&self, params: RequestCreate) -> Result<Request, RequestError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: RequestId, update: RequestUpdate) -> Result<Request, RequestError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Moves the request along its lifecycle and returns the updated record.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: RequestId,
        target: RequestStatus,
    ) -> Result<Request, RequestError> {
        debug!("Moving {} to {}", id, target);
        match self
            .inner
            .perform_action(id, RequestAction::Transition(target))
            .await
            .map_err(Self::map_error)?
        {
            RequestActionResult::Transition(request) => Ok(request),
        }
    }

    /// Requests currently in `status`, in collection order.
    #[instrument(skip(self))]
    pub async fn by_status(&self, status: RequestStatus) -> Result<Vec<Request>, RequestError> {
        let mut requests = self.list().await?;
        requests.retain(|request| request.status == status);
        Ok(requests)
    }

    /// Requests filed under the requester name `requested_by`.
    #[instrument(skip(self))]
    pub async fn by_user(&self, requested_by: &str) -> Result<Vec<Request>, RequestError> {
        let mut requests = self.list().await?;
        requests.retain(|request| request.requested_by == requested_by);
        Ok(requests)
    }
}
