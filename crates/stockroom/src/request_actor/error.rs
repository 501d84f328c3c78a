//! Error types for the Request actor.

use crate::model::RequestStatus;
use thiserror::Error;

/// Errors that can occur during request operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestError {
    /// The request, or the item it references, was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The status change is not an edge of the request lifecycle.
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    /// Requests must ask for at least one unit.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// A required field is missing or blank.
    #[error("Request validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RequestError {
    fn from(msg: String) -> Self {
        RequestError::ActorCommunicationError(msg)
    }
}
