//! HTTP contract tests for the provider backends, against a local mock
//! server.

use brandeval::backends::{Anthropic, OpenAi};
use brandeval::{CompletionProvider, EvalError};

#[tokio::test]
async fn anthropic_returns_the_first_text_block() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content":[{"type":"text","text":"<analysis>ok</analysis>"}]}"#)
        .create_async()
        .await;

    let client = Anthropic::with_base_url("test-key", server.url()).unwrap();
    let text = client.complete("hello").await.unwrap();
    assert_eq!(text, "<analysis>ok</analysis>");
}

#[tokio::test]
async fn anthropic_treats_a_non_text_first_block_as_upstream_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content":[{"type":"tool_use"}]}"#)
        .create_async()
        .await;

    let client = Anthropic::with_base_url("test-key", server.url()).unwrap();
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, EvalError::Upstream { status: None, .. }));
}

#[tokio::test]
async fn anthropic_surfaces_rate_limit_statuses_as_retryable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/messages")
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;

    let client = Anthropic::with_base_url("test-key", server.url()).unwrap();
    let err = client.complete("hello").await.unwrap_err();
    match err {
        EvalError::Upstream { status, .. } => {
            assert_eq!(status, Some(429));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(EvalError::Upstream {
        message: String::new(),
        status: Some(429)
    }
    .is_retryable());
}

#[tokio::test]
async fn anthropic_rejects_an_empty_completion() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content":[]}"#)
        .create_async()
        .await;

    let client = Anthropic::with_base_url("test-key", server.url()).unwrap();
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, EvalError::Upstream { .. }));
}

#[tokio::test]
async fn openai_returns_the_first_choice_content() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"fine"}}]}"#)
        .create_async()
        .await;

    let client = OpenAi::with_base_url("test-key", server.url()).unwrap();
    let text = client.complete("hello").await.unwrap();
    assert_eq!(text, "fine");
}

#[tokio::test]
async fn openai_rejects_empty_message_content() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":""}}]}"#)
        .create_async()
        .await;

    let client = OpenAi::with_base_url("test-key", server.url()).unwrap();
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, EvalError::Upstream { .. }));
}

#[test]
fn empty_api_keys_are_a_configuration_error() {
    assert!(matches!(Anthropic::new(""), Err(EvalError::Config(_))));
    assert!(matches!(OpenAi::new(""), Err(EvalError::Config(_))));
}
