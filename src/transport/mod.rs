//! # Submission Transport
//!
//! The primary channel hands a [`ValidatedOrder`] to a [`SubmissionTransport`] and waits
//! for a yes or no. How the order travels is the transport's business.
//!
//! - [`SimulatedTransport`] - waits a fixed delay and always succeeds
//! - [`KitchenQueueTransport`] - pushes the order onto an in-process kitchen queue

pub mod kitchen_queue;
pub mod simulated;

pub use kitchen_queue::*;
pub use simulated::*;

use crate::model::ValidatedOrder;
use async_trait::async_trait;
use thiserror::Error;

/// Why the primary channel could not deliver an order.
///
/// The `Display` text is shown to the waiter as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Nobody is listening on the kitchen side any more.
    #[error("La cucina non è raggiungibile, riprova.")]
    QueueClosed,

    /// The receiving side refused the order.
    #[error("Comanda rifiutata: {0}")]
    Rejected(String),

    /// The submission task stopped before reporting back.
    #[error("Invio interrotto: {0}")]
    Interrupted(String),
}

/// Pluggable delivery for the primary channel.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn submit(&self, order: &ValidatedOrder) -> Result<(), TransportError>;
}
