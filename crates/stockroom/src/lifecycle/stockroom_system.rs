use crate::clients::{InventoryClient, RequestClient, UserClient};
use crate::config::StockroomConfig;
use crate::inventory_actor::InventoryError;
use crate::request_actor::RequestError;
use crate::seed::{SeedData, SeedError};
use crate::user_actor::UserError;
use crate::views::{DashboardSnapshot, ReportSummary};
use crate::workflow::{FulfillmentWorkflow, WorkflowError};
use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The runtime orchestrator for the stockroom services.
///
/// `StockroomSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the three actors
/// - **Dependency Wiring**: Handing the request actor its inventory client
/// - **Seeding**: Loading each collection before its loop starts
///
/// # Example
///
/// ```ignore
/// let system = StockroomSystem::with_bundled_seed(StockroomConfig::default())?;
///
/// let request = system.requests.create(params).await?;
/// system.workflow().approve(request.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StockroomSystem {
    pub inventory: InventoryClient,
    pub requests: RequestClient,
    pub users: UserClient,
    config: StockroomConfig,
    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StockroomSystem {
    /// Spawns the three actors seeded with `seed`. Must be called inside a Tokio runtime.
    pub fn new(config: StockroomConfig, seed: SeedData) -> Self {
        // 1. Create actors (no dependencies)
        let (inventory_actor, inventory) = crate::inventory_actor::new(config.buffer_size);
        let (request_actor, requests) = crate::request_actor::new(config.buffer_size);
        let (user_actor, users) = crate::user_actor::new(config.buffer_size);

        info!(
            items = seed.items.len(),
            requests = seed.requests.len(),
            users = seed.users.len(),
            "Seeding collections"
        );

        // 2. Start actors with injected context
        let inventory_handle = tokio::spawn(
            inventory_actor
                .with_seed(seed.items)
                .with_latency(config.latency)
                .run(()),
        );
        // Request actor validates item references (Context = InventoryClient)
        let request_handle = tokio::spawn(
            request_actor
                .with_seed(seed.requests)
                .with_latency(config.latency)
                .run(inventory.clone()),
        );
        let user_handle = tokio::spawn(
            user_actor
                .with_seed(seed.users)
                .with_latency(config.latency)
                .run(()),
        );

        Self {
            inventory,
            requests,
            users,
            config,
            handles: vec![inventory_handle, request_handle, user_handle],
        }
    }

    /// Starts from the fixtures bundled with the crate.
    pub fn with_bundled_seed(config: StockroomConfig) -> Result<Self, SystemError> {
        Ok(Self::new(config, SeedData::bundled()?))
    }

    pub fn config(&self) -> &StockroomConfig {
        &self.config
    }

    /// A workflow over this system's clients using the configured policy.
    ///
    /// The workflow holds client clones; drop it before calling [`shutdown`](Self::shutdown).
    pub fn workflow(&self) -> FulfillmentWorkflow {
        FulfillmentWorkflow::new(
            self.requests.clone(),
            self.inventory.clone(),
            self.config.policy,
        )
    }

    /// Reports summary over the current collections, with the trend ending this month.
    pub async fn report(&self) -> Result<ReportSummary, SystemError> {
        let items = self.inventory.get_all().await?;
        let requests = self.requests.get_all().await?;
        Ok(ReportSummary::build(
            &items,
            &requests,
            Utc::now(),
            &self.config.report,
        ))
    }

    pub async fn dashboard(&self) -> Result<DashboardSnapshot, SystemError> {
        let items = self.inventory.get_all().await?;
        let requests = self.requests.get_all().await?;
        let users = self.users.get_all().await?;
        Ok(DashboardSnapshot::build(&items, &requests, &users))
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the request and user channels. The inventory channel
    /// closes once the request actor has exited and released its context clone.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(SystemError::ActorTask)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.requests);
        drop(self.users);
        drop(self.inventory);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
