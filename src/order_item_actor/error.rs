//! Error types for the OrderItem store actor.

use thiserror::Error;

/// Errors that can occur while talking to the order item store.
///
/// Store operations themselves never fail (unknown IDs are no-ops), so the only
/// failure left is losing the actor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderItemError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
