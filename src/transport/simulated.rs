use super::{SubmissionTransport, TransportError};
use crate::model::ValidatedOrder;
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Default latency of the simulated kitchen.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Stand-in for a kitchen backend: sleeps, then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, order: &ValidatedOrder) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;
        info!(
            table = %order.table_number,
            lines = order.lines.len(),
            "Simulated kitchen accepted order"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_then_succeeds() {
        let transport = SimulatedTransport::default();
        let order = ValidatedOrder {
            table_number: "1".into(),
            lines: vec![OrderLine {
                dish_name: "Pizza".into(),
                quantity: 1,
            }],
            modifications: None,
            destination_contact: None,
        };

        let started = tokio::time::Instant::now();
        assert_eq!(transport.submit(&order).await, Ok(()));
        assert!(started.elapsed() >= DEFAULT_SUBMIT_DELAY);
    }
}
