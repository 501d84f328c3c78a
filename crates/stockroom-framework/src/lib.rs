//! # Stockroom Framework
//!
//! Generic building blocks for the stockroom services: one actor per entity collection,
//! a typed client to talk to it, and a trait that turns a plain record into a managed
//! resource.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record, its payloads and its lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - owns the ordered collection, processes one message at a time
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls over a channel
//!
//! Business rules live in the entity hooks; the actor handles ID assignment, ordering,
//! simulated latency and error transport.
//!
//! ## Defining an Entity
//!
//! ```rust
//! use stockroom_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Bin {
//!     id: u32,
//!     label: String,
//! }
//!
//! #[derive(Debug)] struct BinCreate { label: String }
//! #[derive(Debug)] struct BinUpdate { label: Option<String> }
//! #[derive(Debug)] enum BinAction {}
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("{0}")]
//! struct BinError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32;
//!     type Create = BinCreate;
//!     type Update = BinUpdate;
//!     type Action = BinAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = BinError;
//!
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//!
//!     fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, label: params.label })
//!     }
//!
//!     async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(label) = update.label { self.label = label; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: BinAction, _: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Bin>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let bin = client.create(BinCreate { label: "A1".into() }).await.unwrap();
//!     let fetched = client.get(bin.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.label, "A1");
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when the loop starts, not when the actor is built. The
//! request actor is constructed next to the inventory actor and receives the inventory
//! client through `run`:
//!
//! ```rust,ignore
//! let (inventory_actor, inventory) = ResourceActor::<InventoryItem>::new(32);
//! let (request_actor, requests) = ResourceActor::<Request>::new(32);
//!
//! tokio::spawn(inventory_actor.run(()));
//! tokio::spawn(request_actor.run(InventoryClient::new(inventory.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Separate collections progress independently; cross-collection steps (such as approve
//!   then deduct) are separate messages and are not atomic together
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations so that
//! code built on a client can be tested without the actor behind it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod latency;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::{ActorClient, Deleted};
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use latency::LatencyBand;
pub use message::{ResourceRequest, Response};
