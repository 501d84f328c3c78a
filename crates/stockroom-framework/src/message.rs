//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants map to the uniform service contract shared by every stockroom entity:
///
/// - **Create**: builds the entity from [`ActorEntity::Create`], stores it at the front of the
///   collection and answers with the stored copy.
/// - **Get**: the record with the given ID, or `None`.
/// - **List**: a snapshot of the whole collection in collection order.
/// - **Update**: applies an [`ActorEntity::Update`] patch and answers with the updated copy.
/// - **Delete**: removes the record.
/// - **Action**: executes a custom [`ActorEntity::Action`] against one record.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
