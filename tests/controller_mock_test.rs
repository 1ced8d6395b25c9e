//! The controller against a scripted store, without a real store actor.

use comanda::clients::OrderItemClient;
use comanda::error::ComandaError;
use comanda::framework::mock::MockClient;
use comanda::framework::FrameworkError;
use comanda::link::TracingLinkOpener;
use comanda::model::{ItemId, OrderItem};
use comanda::order_item_actor::OrderItemError;
use comanda::submission::{
    Collaborators, ComandaController, ControllerSettings, SubmissionStatus, SubmitOutcome,
    SuggestionOutcome,
};
use comanda::suggestion::PresetSuggester;
use comanda::transport::SimulatedTransport;
use std::sync::Arc;
use std::time::Duration;

fn controller(mock: &MockClient<OrderItem>) -> comanda::clients::ComandaClient {
    let collaborators = Collaborators {
        transport: Arc::new(SimulatedTransport::new(Duration::ZERO)),
        suggester: Arc::new(PresetSuggester::new()),
        opener: Arc::new(TracingLinkOpener),
    };
    let (actor, client) = ComandaController::new(
        8,
        OrderItemClient::new(mock.client()),
        collaborators,
        ControllerSettings::default(),
    );
    tokio::spawn(actor.run());
    client
}

#[tokio::test]
async fn test_primary_submission_removes_sent_lines() {
    let mock = MockClient::<OrderItem>::new();
    mock.expect_list().return_ok(vec![
        OrderItem::new(ItemId(1), "Amatriciana", "2"),
        OrderItem::new(ItemId(2), "Gricia", "1"),
    ]);
    mock.expect_remove().return_ok(true);
    mock.expect_remove().return_ok(true);

    let client = controller(&mock);
    client.set_table_number("9").await.unwrap();

    assert_eq!(client.submit_primary().await, Ok(SubmitOutcome::Submitted));
    assert_eq!(
        client.snapshot().await.unwrap().status,
        SubmissionStatus::Success
    );
    mock.verify();
}

#[tokio::test]
async fn test_failed_removal_still_counts_as_submitted() {
    let mock = MockClient::<OrderItem>::new();
    mock.expect_list()
        .return_ok(vec![OrderItem::new(ItemId(1), "Carbonara", "1")]);
    mock.expect_remove().return_err(FrameworkError::ActorClosed);

    let client = controller(&mock);
    client.set_table_number("9").await.unwrap();

    assert_eq!(client.submit_primary().await, Ok(SubmitOutcome::Submitted));
    assert_eq!(client.snapshot().await.unwrap().table_number, "");
    mock.verify();
}

#[tokio::test]
async fn test_store_failure_surfaces_as_error_status() {
    let mock = MockClient::<OrderItem>::new();
    mock.expect_list().return_err(FrameworkError::ActorDropped);

    let client = controller(&mock);
    client.set_table_number("9").await.unwrap();

    let result = client.submit_secondary().await;
    assert!(matches!(
        result,
        Err(ComandaError::Store(OrderItemError::ActorCommunicationError(_)))
    ));
    assert!(matches!(
        client.snapshot().await.unwrap().status,
        SubmissionStatus::Error { .. }
    ));
    mock.verify();
}

#[tokio::test]
async fn test_suggestion_creates_item_in_store() {
    let mock = MockClient::<OrderItem>::new();
    mock.expect_create().return_ok(ItemId(42));

    let client = controller(&mock);

    let outcome = client.request_suggestion().await.unwrap();
    assert_eq!(
        outcome,
        SuggestionOutcome::Added {
            id: ItemId(42),
            name: "Linguine alle vongole".into()
        }
    );
    mock.verify();
}

#[tokio::test]
async fn test_client_reports_closed_controller() {
    let mock = MockClient::<OrderItem>::new();
    let collaborators = Collaborators {
        transport: Arc::new(SimulatedTransport::new(Duration::ZERO)),
        suggester: Arc::new(PresetSuggester::new()),
        opener: Arc::new(TracingLinkOpener),
    };
    let (actor, client) = ComandaController::new(
        8,
        OrderItemClient::new(mock.client()),
        collaborators,
        ControllerSettings::default(),
    );
    drop(actor);

    assert_eq!(
        client.set_table_number("1").await,
        Err(ComandaError::ControllerClosed)
    );
    assert_eq!(client.snapshot().await, Err(ComandaError::ControllerClosed));
}
