//! # User Actor
//!
//! Manages the staff directory. Users carry no behavior; requests name their requester
//! as free text, so this collection is for display and attribution only.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](stockroom_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use stockroom::user_actor;
//! use stockroom::model::{Role, UserCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let user = client
//!         .create(UserCreate {
//!             name: "Dana Okafor".to_string(),
//!             role: Role::Teacher,
//!             email: None,
//!             department: Some("Science".to_string()),
//!         })
//!         .await?;
//!     assert_eq!(client.get_all().await?[0].id, user.id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use stockroom_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
