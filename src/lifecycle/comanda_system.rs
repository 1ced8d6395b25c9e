use crate::clients::{ComandaClient, OrderItemClient};
use crate::config::ComandaConfig;
use crate::link::{LinkOpener, SystemLinkOpener, TracingLinkOpener};
use crate::order_item_actor;
use crate::submission::{Collaborators, ComandaController};
use crate::suggestion::{GeminiSuggester, PresetSuggester, SuggestionAdapter};
use crate::transport::SimulatedTransport;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running order-composition system: one store actor and one controller actor.
///
/// # Example
///
/// ```ignore
/// let system = ComandaSystem::from_config(ComandaConfig::default());
///
/// let id = system.items.add_item(Some("Margherita")).await?;
/// system.comanda.set_table_number("5").await?;
/// system.comanda.submit_primary().await?;
///
/// system.shutdown().await?;
/// ```
pub struct ComandaSystem {
    /// Edits the dish list.
    pub items: OrderItemClient,

    /// Form fields, submissions and suggestions.
    pub comanda: ComandaClient,

    /// Controller first, then store; awaited in that order on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl ComandaSystem {
    /// Spawns both actors with the given collaborators. Must be called inside a Tokio runtime.
    pub fn new(config: &ComandaConfig, collaborators: Collaborators) -> Self {
        let (store, items) = order_item_actor::new(config.channel_buffer);
        let (controller, comanda) = ComandaController::new(
            config.channel_buffer,
            items.clone(),
            collaborators,
            config.controller_settings(),
        );

        let store_handle = tokio::spawn(store.run());
        let controller_handle = tokio::spawn(controller.run());

        Self {
            items,
            comanda,
            handles: vec![controller_handle, store_handle],
        }
    }

    /// Spawns the system with the default collaborators for `config`.
    ///
    /// Suggestions come from Gemini when an API key is configured, from the preset menu
    /// otherwise. Orders go to the simulated kitchen. Deep-links are opened with the
    /// platform URL handler when `open_links` is set and only logged otherwise.
    pub fn from_config(config: &ComandaConfig) -> Self {
        let suggester: Arc<dyn SuggestionAdapter> = match &config.gemini {
            Some(gemini) => Arc::new(GeminiSuggester::new_with_base_url(
                gemini.api_key.clone(),
                gemini.model.clone(),
                gemini.base_url.clone(),
            )),
            None => Arc::new(PresetSuggester::new()),
        };
        info!(suggester = suggester.name(), "Suggestion adapter selected");

        let opener: Arc<dyn LinkOpener> = if config.open_links {
            Arc::new(SystemLinkOpener)
        } else {
            Arc::new(TracingLinkOpener)
        };

        Self::new(
            config,
            Collaborators {
                transport: Arc::new(SimulatedTransport::new(config.submit_delay)),
                suggester,
                opener,
            },
        )
    }

    /// Drops both clients and waits for the actors to drain and exit.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.comanda);
        drop(self.items);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
