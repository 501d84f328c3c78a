//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the three stockroom actors.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate the inventory, request and user actors and their clients
//! 2. **Seeding** - Load each collection from [`SeedData`](crate::seed::SeedData) before its loop starts
//! 3. **Dependency Injection** - Give the request actor an inventory client via `run(context)`
//! 4. **Graceful Shutdown** - Drop the clients and await every actor task
//!
//! ## Dependency Graph
//!
//! ```text
//! RequestActor ──(InventoryClient)──► InventoryActor
//! UserActor
//! ```
//!
//! The graph is acyclic, so closing channels is enough to stop everything: the request
//! actor exits when its own clients are gone, which releases the last inventory client and
//! lets the inventory actor exit in turn.
//!
//! ## Observability & Tracing
//!
//! Call [`setup_tracing`](stockroom_framework::tracing::setup_tracing) once at startup;
//! verbosity is read from `RUST_LOG`.

pub mod stockroom_system;

pub use stockroom_system::*;
