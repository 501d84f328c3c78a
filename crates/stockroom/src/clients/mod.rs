//! Type-safe wrappers around [`ResourceClient`](stockroom_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](stockroom_framework::ActorClient) for `get`,
//! `list` and `delete`, and adds `get_all`, typed `create`/`update` and the entity's own
//! helpers. Framework errors are mapped back to the entity's error enum: a missing record
//! becomes `NotFound`, a hook failure is recovered as the entity error it was, and channel
//! failures become `ActorCommunicationError`.

pub mod inventory_client;
pub mod request_client;
pub mod user_client;

pub use inventory_client::*;
pub use request_client::*;
pub use user_client::*;
