//! Requests understood by the [`ComandaController`](crate::submission::ComandaController).
//!
//! The first group comes from the UI through a [`ComandaClient`](crate::clients::ComandaClient).
//! The `*Finished` and `ResetStatus` variants are posted back by tasks the controller
//! spawned itself, so their results are applied in mailbox order like everything else.

use crate::error::ComandaError;
use crate::model::ItemId;
use crate::submission::{ControllerSnapshot, SubmitOutcome, SuggestionOutcome};
use crate::suggestion::SuggestionError;
use crate::transport::TransportError;
use tokio::sync::oneshot;

/// One-shot reply channel back to the caller.
pub type Reply<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum ControllerRequest {
    SetTableNumber {
        value: String,
    },
    SetModifications {
        value: String,
    },
    SetDestinationContact {
        value: String,
    },
    Snapshot {
        respond_to: Reply<ControllerSnapshot>,
    },
    SubmitPrimary {
        respond_to: Reply<Result<SubmitOutcome, ComandaError>>,
    },
    SubmitSecondary {
        respond_to: Reply<Result<String, ComandaError>>,
    },
    RequestSuggestion {
        respond_to: Reply<Result<SuggestionOutcome, ComandaError>>,
    },
    TransportFinished {
        result: Result<(), TransportError>,
        /// The lines that were sent; only these leave the store on success.
        submitted: Vec<ItemId>,
        respond_to: Reply<Result<SubmitOutcome, ComandaError>>,
    },
    SuggestionFinished {
        result: Result<String, SuggestionError>,
        respond_to: Reply<Result<SuggestionOutcome, ComandaError>>,
    },
    ResetStatus {
        generation: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_debug_printable() {
        let request = ControllerRequest::SetTableNumber { value: "7".into() };
        let printed = format!("{request:?}");
        assert!(printed.contains("SetTableNumber"));
        assert!(printed.contains("\"7\""));

        let (respond_to, _response) = oneshot::channel();
        let request = ControllerRequest::TransportFinished {
            result: Err(TransportError::QueueClosed),
            submitted: vec![ItemId(3)],
            respond_to,
        };
        let printed = format!("{request:?}");
        assert!(printed.contains("QueueClosed"));
        assert!(printed.contains("ItemId(3)"));
    }
}
