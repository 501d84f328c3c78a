//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one entity collection
//! and processes every request against it sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::latency::LatencyBand;
use crate::message::ResourceRequest;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of a stockroom service. It owns the collection and the
/// receiving end of the channel; the paired [`ResourceClient`] is the only way in.
///
/// **Concurrency Model**:
/// Each actor runs in its own Tokio task and handles one message at a time, so the
/// collection needs no `Mutex`. Callers suspend while their request is queued and processed;
/// nothing can observe a half-applied mutation.
///
/// # Collection Order
/// The collection is a `Vec` rather than a map because order is part of the contract:
/// seeded records keep their fixture order and every created record goes to the front.
/// Lookups are linear, which is fine at dashboard scale.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Seed / tune**: optionally `with_seed(records)` and `with_latency(band)`.
/// 3.  **Wire & Run**: spawn `actor.run(context)` with the entity's dependencies.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<InventoryItem>::new(32);
/// tokio::spawn(actor.with_seed(seed.items).run(()));
/// let items = client.list().await?;
/// ```
///
/// ## Operations
///
/// * **Create**: assigns the next unused ID, calls `T::from_create_params`, then the
///   `on_create` hook, inserts at index 0 and answers with the stored copy.
/// * **Get**: a clone of the matching record, or `None`.
/// * **List**: clones of every record in collection order.
/// * **Update**: `on_update` on the stored record, answers with the new state.
/// * **Delete**: `on_delete`, then removal.
/// * **Action**: `handle_action` on the stored record, answers with its result.
///
/// Update, Delete and Action answer [`FrameworkError::NotFound`] for unknown IDs.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    /// IDs removed by Delete; never issued again.
    retired: HashSet<T::Id>,
    /// `None` once `u32::MAX` has been issued.
    next_id: Option<u32>,
    latency: LatencyBand,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            retired: HashSet::new(),
            next_id: Some(1),
            latency: LatencyBand::none(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Replace the collection with seed records, kept in the given order.
    pub fn with_seed(mut self, records: Vec<T>) -> Self {
        self.store = records;
        self
    }

    /// Delay every request by a duration drawn from `latency`.
    pub fn with_latency(mut self, latency: LatencyBand) -> Self {
        self.latency = latency;
        self
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Next ID from the counter that no stored or deleted record has used.
    fn fresh_id(&mut self) -> Result<T::Id, FrameworkError> {
        loop {
            let n = self.next_id.ok_or(FrameworkError::IdsExhausted)?;
            self.next_id = n.checked_add(1);
            let id = T::Id::from(n);
            if !self.retired.contains(&id) && self.position(&id).is_none() {
                return Ok(id);
            }
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to reach other services (like the inventory client) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "InventoryItem" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.latency.wait().await;

            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.fresh_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(0, item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.store[idx].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(idx) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Patch a copy so a failing hook leaves the stored record untouched.
                    let mut item = self.store[idx].clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store[idx] = item.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(idx) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = self.store[idx].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(idx);
                    self.retired.insert(removed.id().clone());
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(idx) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut item = self.store[idx].clone();
                    let result = item.handle_action(action, &context).await;
                    match result {
                        Ok(value) => {
                            self.store[idx] = item;
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(value));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
