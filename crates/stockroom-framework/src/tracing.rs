//! # Observability & Tracing
//!
//! Structured logging for every stockroom actor.
//!
//! The actor loop emits one event per operation with an `entity_type` field
//! (`InventoryItem`, `Request`, `User`) and the record ID, and the typed clients add
//! `#[instrument]` spans, so a fulfillment reads as one nested flow:
//!
//! ```text
//! INFO fulfill:transition: Action ok entity_type="Request" id=request_7
//! INFO fulfill:deduct_stock: Action ok entity_type="InventoryItem" id=item_1
//! ```
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run -p stockroom
//! RUST_LOG=debug cargo run -p stockroom   # full payloads of Create/Update/Action
//! ```

/// Initialise the global subscriber: env filter, compact format, no module targets.
///
/// Safe to call more than once; later calls are ignored, which keeps tests that each
/// set up logging from panicking.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already names the source
        .compact()
        .try_init();
}
