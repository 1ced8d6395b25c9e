//! Crate-level error type.
//!
//! Every failure the waiter can run into ends up here. None of them is fatal: the
//! controller records the message in its status and carries on.

use crate::order_item_actor::OrderItemError;
use crate::suggestion::SuggestionError;
use crate::transport::TransportError;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComandaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),

    #[error(transparent)]
    Store(#[from] OrderItemError),

    /// The controller actor is no longer running.
    #[error("Controller closed")]
    ControllerClosed,
}
