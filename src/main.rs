//! # Comanda demo
//!
//! A scripted waiter session against the default system:
//! 1. Quick-add two preset dishes and bump a quantity.
//! 2. Ask for a suggested dish.
//! 3. Send the order on the messaging deep-link (the form is kept).
//! 4. Submit to the kitchen and wait for the success banner to clear.
//!
//! Settings come from the environment, with `.env.local` loaded first if present.

use comanda::config::ComandaConfig;
use comanda::lifecycle::{setup_tracing, ComandaSystem};
use comanda::model::{ItemField, PRESET_DISHES};
use comanda::submission::SubmissionStatus;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let _ = dotenvy::from_filename(".env.local");
    setup_tracing();

    let config = ComandaConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting comanda demo");

    let system = ComandaSystem::from_config(&config);

    let span = tracing::info_span!("order_composition");
    async {
        let first = system.items.add_item(Some(PRESET_DISHES[0])).await?;
        system.items.add_item(Some(PRESET_DISHES[8])).await?;
        system.items.update_item(first, ItemField::Quantity, "2").await?;
        system.comanda.set_table_number("5").await?;
        system.comanda.set_modifications("Olive senza glutine").await?;
        system.comanda.set_destination_contact("+39 312 345 6789").await?;
        Ok::<_, comanda::error::ComandaError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("suggestion");
    match system.comanda.request_suggestion().instrument(span).await {
        Ok(outcome) => info!(?outcome, "Suggestion handled"),
        Err(e) => warn!(error = %e, "Suggestion failed"),
    }

    let span = tracing::info_span!("secondary_channel");
    match system.comanda.submit_secondary().instrument(span).await {
        Ok(url) => info!(%url, "Order shared"),
        Err(e) => error!(error = %e, "Sharing failed"),
    }

    let span = tracing::info_span!("primary_channel");
    async {
        match system.comanda.submit_primary().await {
            Ok(outcome) => {
                info!(?outcome, "Kitchen answered");
                let mut status = system.comanda.subscribe();
                if status
                    .wait_for(|s| s.status == SubmissionStatus::Idle && !s.is_submitting)
                    .await
                    .is_ok()
                {
                    info!("Status back to idle");
                }
            }
            Err(e) => error!(error = %e, "Submission failed"),
        }
    }
    .instrument(span)
    .await;

    let remaining = system.items.items().await.map_err(|e| e.to_string())?;
    info!(remaining = remaining.len(), "Session finished");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
