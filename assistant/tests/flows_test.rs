//! Summary and Q&A flows against a mocked chat-completions endpoint.

mod common;

use common::{
    completion_body, has_system_then_user, legal_service, COMPLETIONS_PATH, TEST_API_KEY,
    TEST_BEARER,
};
use httpmock::prelude::*;
use legal_assistant::{Flow, LegalService, ModelChoice, OpenAiService, Settings};
use serde_json::json;
use std::path::PathBuf;

#[tokio::test]
async fn summary_is_returned_verbatim() {
    let server = MockServer::start_async().await;
    let document = "This Agreement shall terminate on 30 days' notice.";

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(COMPLETIONS_PATH)
                .header("authorization", TEST_BEARER)
                .body_contains(document)
                .body_contains("specializing in Indian law")
                .matches(has_system_then_user)
                .json_body_partial(
                    r#"{"model":"gpt-3.5-turbo","max_tokens":1500,"temperature":0.3}"#,
                );
            then.status(200)
                .json_body(completion_body("Summary: either party may end the agreement."));
        })
        .await;

    let service = legal_service(&server);
    let summary = service
        .summarize(document, ModelChoice::Fast)
        .await
        .expect("summary should succeed");

    assert_eq!(summary, "Summary: either party may end the agreement.");
    mock.assert_async().await;
}

#[tokio::test]
async fn answer_sends_raw_question_with_fixed_parameters() {
    let server = MockServer::start_async().await;
    let question = "Can my landlord evict me without notice in India?";

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(COMPLETIONS_PATH)
                .matches(has_system_then_user)
                .body_contains(
                    r#"{"role":"user","content":"Can my landlord evict me without notice in India?"}"#,
                )
                .json_body_partial(r#"{"model":"gpt-4","max_tokens":1000,"temperature":0.3}"#);
            then.status(200)
                .json_body(completion_body("Under the Rent Control Acts, generally no."));
        })
        .await;

    let service = legal_service(&server);
    let answer = service.answer(question, ModelChoice::Advanced).await.unwrap();

    assert_eq!(answer, "Under the Rent Control Acts, generally no.");
    mock.assert_async().await;
}

#[tokio::test]
async fn provider_error_becomes_summary_flow_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(COMPLETIONS_PATH);
            then.status(401).json_body(json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error"
                }
            }));
        })
        .await;

    let err = legal_service(&server)
        .summarize("Some contract text", ModelChoice::Fast)
        .await
        .unwrap_err();

    assert_eq!(err.flow, Flow::Summary);
    let message = err.to_string();
    assert!(message.starts_with("Error generating summary: "), "{message}");
    assert!(message.contains("Incorrect API key provided"), "{message}");
    assert!(message.contains("401"), "{message}");
}

#[tokio::test]
async fn provider_error_becomes_answer_flow_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(COMPLETIONS_PATH);
            then.status(429).body("You exceeded your current quota");
        })
        .await;

    let err = legal_service(&server)
        .answer("What are the basic rights of consumers in India?", ModelChoice::Fast)
        .await
        .unwrap_err();

    assert_eq!(err.flow, Flow::Answer);
    let message = err.to_string();
    assert!(message.starts_with("Error generating answer: "), "{message}");
    assert!(message.contains("exceeded your current quota"), "{message}");
}

#[tokio::test]
async fn malformed_response_is_a_flow_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(COMPLETIONS_PATH);
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = legal_service(&server)
        .answer("Is a verbal contract valid?", ModelChoice::Fast)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to decode OpenAI API response"));
}

#[tokio::test]
async fn response_without_choices_is_a_flow_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(COMPLETIONS_PATH);
            then.status(200).json_body(json!({ "choices": [] }));
        })
        .await;

    let err = legal_service(&server)
        .summarize("Lease deed text", ModelChoice::Fast)
        .await
        .unwrap_err();

    assert!(err.detail.contains("no message content"), "{}", err.detail);
}

#[tokio::test]
async fn unreachable_provider_is_a_flow_error() {
    let settings = Settings {
        api_key: TEST_API_KEY.to_string(),
        base_url: "http://127.0.0.1:1/v1".to_string(),
        default_model: ModelChoice::Fast,
        secrets_path: PathBuf::new(),
    };
    let service = LegalService::new(OpenAiService::new(&settings).unwrap());

    let err = service
        .answer("What is a lease?", ModelChoice::Fast)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Error generating answer: "));
    assert!(err.detail.contains("request to the OpenAI API failed"));
}

#[tokio::test]
async fn each_call_is_a_single_attempt() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(COMPLETIONS_PATH);
            then.status(500).body("internal error");
        })
        .await;

    let service = legal_service(&server);
    assert!(service.summarize("text", ModelChoice::Fast).await.is_err());
    assert!(service.answer("question?", ModelChoice::Fast).await.is_err());

    assert_eq!(mock.hits_async().await, 2);
}
