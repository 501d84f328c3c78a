//! # Stockroom demo
//!
//! Starts the services from the bundled fixtures with simulated latency, walks one request
//! through its lifecycle and logs the resulting dashboard and report numbers.
//!
//! ```bash
//! RUST_LOG=info cargo run -p stockroom
//! ```

use stockroom::config::StockroomConfig;
use stockroom::lifecycle::{StockroomSystem, SystemError};
use stockroom::model::{ItemId, Priority, RequestCreate, StockLevel};
use stockroom::views::InventoryFilter;
use stockroom::workflow::StockOutcome;
use stockroom_framework::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    info!("Starting stockroom services");
    let system = StockroomSystem::with_bundled_seed(StockroomConfig::demo())?;

    let dashboard = system.dashboard().await?;
    info!(
        total_items = dashboard.total_items,
        low_stock = dashboard.low_stock_items,
        pending = dashboard.pending_requests,
        users = dashboard.total_users,
        "Dashboard loaded"
    );

    let items = system.inventory.get_all().await?;
    let out_of_stock = InventoryFilter {
        stock_level: Some(StockLevel::OutOfStock),
        ..Default::default()
    }
    .apply(&items);
    for item in &out_of_stock {
        info!(item_id = %item.id, name = %item.name, "Out of stock");
    }

    let span = tracing::info_span!("request_lifecycle");
    let result = async {
        let workflow = system.workflow();
        let request = system
            .requests
            .create(RequestCreate {
                item_id: ItemId(1),
                requested_by: "Sarah Johnson".to_string(),
                quantity: 3,
                priority: Priority::High,
                notes: Some("Markers for the spring exams".to_string()),
            })
            .await?;
        info!(request_id = %request.id, "Request filed");

        workflow.approve(request.id).await?;
        let outcome = workflow.fulfill(request.id).await?;
        if let StockOutcome::Deducted { item_id, remaining } = outcome.stock {
            info!(%item_id, remaining, "Stock deducted");
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = result {
        error!(error = %e, "Request lifecycle failed");
    }

    let report = system.report().await?;
    info!(
        value = report.estimated_value,
        fulfillment_rate = report.fulfillment_rate,
        low_stock = report.low_stock_items,
        "Report built"
    );

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
