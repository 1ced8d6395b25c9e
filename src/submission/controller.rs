use crate::clients::{ComandaClient, OrderItemClient};
use crate::error::ComandaError;
use crate::formatter::{deep_link, format_message, DEFAULT_MESSAGING_HOST};
use crate::link::LinkOpener;
use crate::model::{Channel, ItemId, Order, ValidatedOrder};
use crate::submission::{
    ControllerRequest, ControllerSnapshot, Reply, SubmissionStatus, SubmitOutcome,
    SuggestionOutcome,
};
use crate::suggestion::{SuggestionAdapter, SuggestionError};
use crate::transport::{SubmissionTransport, TransportError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// How long the success banner stays up before the status falls back to idle.
pub const DEFAULT_STATUS_RESET: Duration = Duration::from_millis(3000);

/// The pluggable outside world of the controller.
#[derive(Clone)]
pub struct Collaborators {
    pub transport: Arc<dyn SubmissionTransport>,
    pub suggester: Arc<dyn SuggestionAdapter>,
    pub opener: Arc<dyn LinkOpener>,
}

/// Tunables of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Host of the secondary-channel deep-link, e.g. `wa.me`.
    pub messaging_host: String,
    /// Delay after which a success status returns to idle.
    pub status_reset_delay: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            messaging_host: DEFAULT_MESSAGING_HOST.to_string(),
            status_reset_delay: DEFAULT_STATUS_RESET,
        }
    }
}

#[derive(Debug, Default)]
struct FormFields {
    table_number: String,
    modifications: String,
    destination_contact: String,
}

/// Owns the form fields and the submission workflow.
///
/// Like the store actor, it handles one request at a time. The slow parts (transport,
/// suggestion, reset timer) run in spawned tasks that report back through a weak
/// sender to the controller's own mailbox, so their results are applied in order
/// with everything else and nothing is delivered once the controller is gone.
pub struct ComandaController {
    receiver: mpsc::Receiver<ControllerRequest>,
    loopback: mpsc::WeakSender<ControllerRequest>,
    items: OrderItemClient,
    collaborators: Collaborators,
    settings: ControllerSettings,
    form: FormFields,
    status: SubmissionStatus,
    is_submitting: bool,
    is_suggesting: bool,
    reset_timer: Option<JoinHandle<()>>,
    /// Bumped on every status change; a reset carrying an older value is stale.
    generation: u64,
    observers: watch::Sender<ControllerSnapshot>,
}

impl ComandaController {
    pub fn new(
        buffer_size: usize,
        items: OrderItemClient,
        collaborators: Collaborators,
        settings: ControllerSettings,
    ) -> (Self, ComandaClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (observers, observer) = watch::channel(ControllerSnapshot::default());
        let loopback = sender.downgrade();

        let controller = Self {
            receiver,
            loopback,
            items,
            collaborators,
            settings,
            form: FormFields::default(),
            status: SubmissionStatus::Idle,
            is_submitting: false,
            is_suggesting: false,
            reset_timer: None,
            generation: 0,
            observers,
        };
        (controller, ComandaClient::new(sender, observer))
    }

    pub async fn run(mut self) {
        info!(
            transport = self.collaborators.transport.name(),
            suggester = self.collaborators.suggester.name(),
            "Controller started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg).await;
            self.publish();
        }

        self.cancel_reset();
        info!(status = ?self.status, "Controller shutdown");
    }

    async fn handle(&mut self, msg: ControllerRequest) {
        debug!(request = ?msg, "Request");
        match msg {
            ControllerRequest::SetTableNumber { value } => self.form.table_number = value,
            ControllerRequest::SetModifications { value } => self.form.modifications = value,
            ControllerRequest::SetDestinationContact { value } => {
                self.form.destination_contact = value
            }
            ControllerRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.snapshot());
            }
            ControllerRequest::SubmitPrimary { respond_to } => {
                self.submit_primary(respond_to).await
            }
            ControllerRequest::SubmitSecondary { respond_to } => {
                let result = self.submit_secondary().await;
                let _ = respond_to.send(result);
            }
            ControllerRequest::RequestSuggestion { respond_to } => {
                self.request_suggestion(respond_to)
            }
            ControllerRequest::TransportFinished {
                result,
                submitted,
                respond_to,
            } => self.finish_primary(result, submitted, respond_to).await,
            ControllerRequest::SuggestionFinished { result, respond_to } => {
                self.finish_suggestion(result, respond_to).await
            }
            ControllerRequest::ResetStatus { generation } => self.reset_status(generation),
        }
    }

    fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            table_number: self.form.table_number.clone(),
            modifications: self.form.modifications.clone(),
            destination_contact: self.form.destination_contact.clone(),
            status: self.status.clone(),
            is_submitting: self.is_submitting,
            is_suggesting: self.is_suggesting,
        }
    }

    fn publish(&self) {
        let next = self.snapshot();
        self.observers.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    /// Validates the current order and returns it with the ids of the lines it was built from.
    async fn validated_order(
        &self,
        channel: Channel,
    ) -> Result<(ValidatedOrder, Vec<ItemId>), ComandaError> {
        let items = self.items.items().await?;
        let ids = items.iter().map(|item| item.id).collect();
        let order = Order {
            items,
            table_number: self.form.table_number.clone(),
            modifications: self.form.modifications.clone(),
            destination_contact: self.form.destination_contact.clone(),
        };
        Ok((order.validated(channel)?, ids))
    }

    // --- status ---

    fn set_status(&mut self, status: SubmissionStatus) {
        self.cancel_reset();
        self.status = status;
    }

    fn fail(&mut self, error: &ComandaError) {
        warn!(error = %error, "Submission workflow failed");
        self.set_status(SubmissionStatus::Error {
            message: error.to_string(),
        });
    }

    fn cancel_reset(&mut self) {
        self.generation += 1;
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }

    fn schedule_reset(&mut self) {
        let generation = self.generation;
        let delay = self.settings.status_reset_delay;
        let loopback = self.loopback.clone();

        self.reset_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(sender) = loopback.upgrade() {
                let _ = sender.send(ControllerRequest::ResetStatus { generation }).await;
            }
        }));
    }

    fn reset_status(&mut self, generation: u64) {
        if generation != self.generation || self.status != SubmissionStatus::Success {
            debug!(generation, current = self.generation, "Stale status reset dropped");
            return;
        }
        self.reset_timer = None;
        self.status = SubmissionStatus::Idle;
        debug!("Status reset to idle");
    }

    // --- primary channel ---

    async fn submit_primary(&mut self, respond_to: Reply<Result<SubmitOutcome, ComandaError>>) {
        if self.is_submitting {
            debug!("Primary submission already in flight, ignoring");
            let _ = respond_to.send(Ok(SubmitOutcome::Ignored));
            return;
        }

        let (order, submitted) = match self.validated_order(Channel::Primary).await {
            Ok(validated) => validated,
            Err(e) => {
                self.fail(&e);
                let _ = respond_to.send(Err(e));
                return;
            }
        };

        info!(table = %order.table_number, lines = order.lines.len(), "Submitting order");
        self.is_submitting = true;
        self.set_status(SubmissionStatus::Idle);

        let transport = Arc::clone(&self.collaborators.transport);
        let loopback = self.loopback.clone();
        tokio::spawn(async move {
            // The inner task turns a panicking transport into an error instead of a lost reply.
            let result = match tokio::spawn(async move { transport.submit(&order).await }).await {
                Ok(result) => result,
                Err(e) => Err(TransportError::Interrupted(e.to_string())),
            };
            match loopback.upgrade() {
                Some(sender) => {
                    let _ = sender
                        .send(ControllerRequest::TransportFinished {
                            result,
                            submitted,
                            respond_to,
                        })
                        .await;
                }
                None => debug!("Controller gone, submission result dropped"),
            }
        });
    }

    async fn finish_primary(
        &mut self,
        result: Result<(), TransportError>,
        submitted: Vec<ItemId>,
        respond_to: Reply<Result<SubmitOutcome, ComandaError>>,
    ) {
        self.is_submitting = false;

        if let Err(e) = result {
            let error = ComandaError::from(e);
            self.fail(&error);
            let _ = respond_to.send(Err(error));
            return;
        }

        self.set_status(SubmissionStatus::Success);
        // Lines added while the transport was busy were not sent and stay in the order.
        for id in submitted {
            if let Err(e) = self.items.remove_item(id).await {
                warn!(error = %e, %id, "Could not remove submitted item");
            }
        }
        self.form.table_number.clear();
        self.form.modifications.clear();
        self.schedule_reset();

        info!("Order submitted");
        let _ = respond_to.send(Ok(SubmitOutcome::Submitted));
    }

    // --- secondary channel ---

    async fn submit_secondary(&mut self) -> Result<String, ComandaError> {
        let (order, _) = match self.validated_order(Channel::Secondary).await {
            Ok(validated) => validated,
            Err(e) => {
                self.fail(&e);
                return Err(e);
            }
        };

        self.set_status(SubmissionStatus::Idle);
        let message = format_message(&order);
        let url = deep_link(
            &self.settings.messaging_host,
            &self.form.destination_contact,
            &message,
        );
        debug!(%message, "Formatted order message");
        self.collaborators.opener.open(&url);
        info!(table = %order.table_number, "Deep link handed off");
        Ok(url)
    }

    // --- suggestions ---

    fn request_suggestion(&mut self, respond_to: Reply<Result<SuggestionOutcome, ComandaError>>) {
        if self.is_suggesting {
            debug!("Suggestion already in flight, ignoring");
            let _ = respond_to.send(Ok(SuggestionOutcome::Ignored));
            return;
        }

        self.is_suggesting = true;
        let suggester = Arc::clone(&self.collaborators.suggester);
        let loopback = self.loopback.clone();
        tokio::spawn(async move {
            let result = match tokio::spawn(async move { suggester.suggest().await }).await {
                Ok(result) => result,
                Err(e) => Err(SuggestionError::Interrupted(e.to_string())),
            };
            match loopback.upgrade() {
                Some(sender) => {
                    let _ = sender
                        .send(ControllerRequest::SuggestionFinished { result, respond_to })
                        .await;
                }
                None => debug!("Controller gone, suggestion dropped"),
            }
        });
    }

    async fn finish_suggestion(
        &mut self,
        result: Result<String, SuggestionError>,
        respond_to: Reply<Result<SuggestionOutcome, ComandaError>>,
    ) {
        self.is_suggesting = false;

        let outcome = match result {
            Ok(name) => match self.items.add_item(Some(name.as_str())).await {
                Ok(id) => {
                    info!(%id, dish = %name, "Suggested dish added");
                    Ok(SuggestionOutcome::Added { id, name })
                }
                Err(e) => Err(ComandaError::from(e)),
            },
            Err(e) => Err(ComandaError::from(e)),
        };

        if let Err(e) = &outcome {
            self.fail(e);
        }
        let _ = respond_to.send(outcome);
    }
}
