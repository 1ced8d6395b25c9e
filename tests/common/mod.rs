//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use comanda::config::ComandaConfig;
use comanda::link::LinkOpener;
use comanda::lifecycle::ComandaSystem;
use comanda::model::ValidatedOrder;
use comanda::submission::Collaborators;
use comanda::suggestion::{SuggestionAdapter, SuggestionError};
use comanda::transport::{SimulatedTransport, SubmissionTransport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Remembers every link it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

/// Refuses every order.
pub struct RejectingTransport;

#[async_trait]
impl SubmissionTransport for RejectingTransport {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn submit(&self, _order: &ValidatedOrder) -> Result<(), TransportError> {
        Err(TransportError::Rejected("cucina chiusa".into()))
    }
}

/// Holds every submission until [`GatedTransport::release`] is called.
#[derive(Default)]
pub struct GatedTransport {
    gate: Notify,
    pub received: Mutex<Vec<ValidatedOrder>>,
}

impl GatedTransport {
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl SubmissionTransport for GatedTransport {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn submit(&self, order: &ValidatedOrder) -> Result<(), TransportError> {
        self.received.lock().unwrap().push(order.clone());
        self.gate.notified().await;
        Ok(())
    }
}

/// Answers with queued results, in order. Panics when the queue is empty.
#[derive(Default)]
pub struct ScriptedSuggester {
    answers: Mutex<VecDeque<Result<String, SuggestionError>>>,
}

impl ScriptedSuggester {
    pub fn new(answers: Vec<Result<String, SuggestionError>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
        }
    }
}

#[async_trait]
impl SuggestionAdapter for ScriptedSuggester {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn suggest(&self) -> Result<String, SuggestionError> {
        let next = self.answers.lock().unwrap().pop_front();
        next.expect("no scripted suggestion left")
    }
}

/// Waits for [`GatedSuggester::release`] before answering with its dish.
pub struct GatedSuggester {
    gate: Notify,
    dish: String,
}

impl GatedSuggester {
    pub fn new(dish: &str) -> Self {
        Self {
            gate: Notify::new(),
            dish: dish.to_string(),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl SuggestionAdapter for GatedSuggester {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn suggest(&self) -> Result<String, SuggestionError> {
        self.gate.notified().await;
        Ok(self.dish.clone())
    }
}

pub struct Harness {
    pub system: ComandaSystem,
    pub opener: Arc<RecordingOpener>,
}

pub fn spawn_system(
    transport: Arc<dyn SubmissionTransport>,
    suggester: Arc<dyn SuggestionAdapter>,
) -> Harness {
    let opener = Arc::new(RecordingOpener::default());
    let system = ComandaSystem::new(
        &ComandaConfig::default(),
        Collaborators {
            transport,
            suggester,
            opener: opener.clone(),
        },
    );
    Harness { system, opener }
}

/// Simulated kitchen with the default delay, and no suggestions expected.
pub fn default_system() -> Harness {
    spawn_system(
        Arc::new(SimulatedTransport::default()),
        Arc::new(ScriptedSuggester::default()),
    )
}
