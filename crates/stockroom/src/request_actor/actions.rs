//! Custom actions for the Request actor.

use crate::model::{Request, RequestStatus};

/// Custom actions for requests.
#[derive(Debug, Clone)]
pub enum RequestAction {
    /// Moves the request to `target`.
    ///
    /// # Errors
    /// `InvalidTransition` unless the move is an edge of the lifecycle; the request is
    /// left as it was.
    Transition(RequestStatus),
}

/// Results from RequestActions - variants match 1:1 with RequestAction
#[derive(Debug, Clone, PartialEq)]
pub enum RequestActionResult {
    /// The request after the transition
    Transition(Request),
}
