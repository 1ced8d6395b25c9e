//! # Comanda Client
//!
//! The UI-facing handle of the [`ComandaController`](crate::submission::ComandaController).
//! Field setters are fire-and-forget; everything else waits for the controller's answer.
use crate::error::ComandaError;
use crate::submission::{
    ControllerRequest, ControllerSnapshot, Reply, SubmitOutcome, SuggestionOutcome,
};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ComandaClient {
    sender: mpsc::Sender<ControllerRequest>,
    observer: watch::Receiver<ControllerSnapshot>,
}

impl ComandaClient {
    pub fn new(
        sender: mpsc::Sender<ControllerRequest>,
        observer: watch::Receiver<ControllerSnapshot>,
    ) -> Self {
        Self { sender, observer }
    }

    async fn send(&self, request: ControllerRequest) -> Result<(), ComandaError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| ComandaError::ControllerClosed)
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Reply<R>) -> ControllerRequest,
    ) -> Result<R, ComandaError> {
        let (respond_to, response) = oneshot::channel();
        self.send(build(respond_to)).await?;
        response.await.map_err(|_| ComandaError::ControllerClosed)
    }

    #[instrument(skip(self, value))]
    pub async fn set_table_number(&self, value: impl Into<String>) -> Result<(), ComandaError> {
        self.send(ControllerRequest::SetTableNumber {
            value: value.into(),
        })
        .await
    }

    #[instrument(skip(self, value))]
    pub async fn set_modifications(&self, value: impl Into<String>) -> Result<(), ComandaError> {
        self.send(ControllerRequest::SetModifications {
            value: value.into(),
        })
        .await
    }

    #[instrument(skip(self, value))]
    pub async fn set_destination_contact(
        &self,
        value: impl Into<String>,
    ) -> Result<(), ComandaError> {
        self.send(ControllerRequest::SetDestinationContact {
            value: value.into(),
        })
        .await
    }

    /// Sends the order to the kitchen.
    ///
    /// Resolves once the transport has answered. Validation and transport failures come
    /// back as `Err` and are also reflected in the snapshot's status.
    #[instrument(skip(self))]
    pub async fn submit_primary(&self) -> Result<SubmitOutcome, ComandaError> {
        debug!("Sending request");
        self.request(|respond_to| ControllerRequest::SubmitPrimary { respond_to })
            .await?
    }

    /// Formats the order, opens the deep-link and returns it. The form is left untouched.
    #[instrument(skip(self))]
    pub async fn submit_secondary(&self) -> Result<String, ComandaError> {
        debug!("Sending request");
        self.request(|respond_to| ControllerRequest::SubmitSecondary { respond_to })
            .await?
    }

    /// Asks for one dish suggestion and appends it to the order.
    #[instrument(skip(self))]
    pub async fn request_suggestion(&self) -> Result<SuggestionOutcome, ComandaError> {
        debug!("Sending request");
        self.request(|respond_to| ControllerRequest::RequestSuggestion { respond_to })
            .await?
    }

    pub async fn snapshot(&self) -> Result<ControllerSnapshot, ComandaError> {
        self.request(|respond_to| ControllerRequest::Snapshot { respond_to })
            .await
    }

    /// A receiver that sees every published snapshot, starting with the latest one.
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.observer.clone()
    }
}
