use comanda::suggestion::{GeminiSuggester, SuggestionAdapter, SuggestionError};
use httpmock::prelude::*;
use serde_json::json;

const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn suggester(server: &MockServer) -> GeminiSuggester {
    GeminiSuggester::new_with_base_url(
        "test-key".into(),
        "gemini-2.5-flash".into(),
        server.base_url(),
    )
}

#[tokio::test]
async fn test_gemini_returns_cleaned_dish_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PATH)
                .header("x-goog-api-key", "test-key")
                .body_contains("Italian dish");
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "  \"Risotto alla milanese\"\n" }] }
                }]
            }));
        })
        .await;

    let name = suggester(&server).suggest().await.unwrap();
    assert_eq!(name, "Risotto alla milanese");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_gemini_empty_candidate_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(json!({
                "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
            }));
        })
        .await;

    assert_eq!(suggester(&server).suggest().await, Err(SuggestionError::Empty));
}

#[tokio::test]
async fn test_gemini_no_candidates_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(json!({}));
        })
        .await;

    assert_eq!(suggester(&server).suggest().await, Err(SuggestionError::Empty));
}

#[tokio::test]
async fn test_gemini_api_error_carries_status_and_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(403).json_body(json!({
                "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
            }));
        })
        .await;

    assert_eq!(
        suggester(&server).suggest().await,
        Err(SuggestionError::Api {
            status: 403,
            message: "API key not valid".into()
        })
    );
}

#[tokio::test]
async fn test_gemini_error_without_body_uses_reason() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(503);
        })
        .await;

    assert_eq!(
        suggester(&server).suggest().await,
        Err(SuggestionError::Api {
            status: 503,
            message: "Service Unavailable".into()
        })
    );
}
