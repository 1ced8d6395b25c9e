use super::{SubmissionTransport, TransportError};
use crate::model::ValidatedOrder;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// One order as it arrives in the kitchen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenTicket {
    /// Sequence number, starting at 1 for each queue.
    pub number: u64,
    pub order: ValidatedOrder,
}

/// Transport backed by a bounded in-process queue.
///
/// The kitchen side owns the [`mpsc::Receiver`] returned by [`KitchenQueueTransport::new`].
/// Submission succeeds once the ticket is enqueued; it fails with
/// [`TransportError::QueueClosed`] if the receiver has been dropped.
#[derive(Debug)]
pub struct KitchenQueueTransport {
    sender: mpsc::Sender<KitchenTicket>,
    next_number: AtomicU64,
}

impl KitchenQueueTransport {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Receiver<KitchenTicket>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let transport = Self {
            sender,
            next_number: AtomicU64::new(1),
        };
        (transport, receiver)
    }
}

#[async_trait]
impl SubmissionTransport for KitchenQueueTransport {
    fn name(&self) -> &'static str {
        "kitchen-queue"
    }

    async fn submit(&self, order: &ValidatedOrder) -> Result<(), TransportError> {
        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        let ticket = KitchenTicket {
            number,
            order: order.clone(),
        };

        if self.sender.send(ticket).await.is_err() {
            warn!(number, "Kitchen queue closed");
            return Err(TransportError::QueueClosed);
        }
        info!(number, table = %order.table_number, "Ticket queued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;

    fn order(table: &str) -> ValidatedOrder {
        ValidatedOrder {
            table_number: table.into(),
            lines: vec![OrderLine {
                dish_name: "Patatine fritte".into(),
                quantity: 2,
            }],
            modifications: Some("extra sale".into()),
            destination_contact: None,
        }
    }

    #[tokio::test]
    async fn test_tickets_are_numbered_in_submission_order() {
        let (transport, mut kitchen) = KitchenQueueTransport::new(4);

        transport.submit(&order("1")).await.unwrap();
        transport.submit(&order("2")).await.unwrap();

        let first = kitchen.recv().await.unwrap();
        let second = kitchen.recv().await.unwrap();
        assert_eq!((first.number, first.order.table_number.as_str()), (1, "1"));
        assert_eq!((second.number, second.order.table_number.as_str()), (2, "2"));
    }

    #[tokio::test]
    async fn test_closed_kitchen_is_reported() {
        let (transport, kitchen) = KitchenQueueTransport::new(4);
        drop(kitchen);

        assert_eq!(
            transport.submit(&order("3")).await,
            Err(TransportError::QueueClosed)
        );
    }
}
