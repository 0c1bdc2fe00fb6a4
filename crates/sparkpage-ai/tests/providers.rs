//! HTTP-level provider tests against a mock server.

use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sparkpage_ai::{AnthropicChat, OllamaChat, OpenAiChat};
use sparkpage_core::{ChatProvider, ProviderConfig, SparkError};

#[tokio::test]
async fn openai_returns_the_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "{\"appName\": \"Foo\"}"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProviderConfig::new("test-key", "gpt-4o-mini")
        .with_base_url(format!("{}/v1/chat/completions", server.uri()));
    let provider = OpenAiChat::new(config).unwrap();

    let reply = provider
        .send("make a page", CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(reply, "{\"appName\": \"Foo\"}");
}

#[tokio::test]
async fn openai_maps_api_failures_to_provider_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let config = ProviderConfig::new("test-key", "gpt-4o-mini").with_base_url(server.uri());
    let provider = OpenAiChat::new(config).unwrap();

    let err = provider
        .send("make a page", CancellationToken::new())
        .await
        .unwrap_err();
    match err {
        SparkError::Provider(message) => {
            assert!(message.contains("429"));
            assert!(message.contains("rate limited"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn cancellation_aborts_a_slow_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(30))
                .set_body_json(json!({"choices": []})),
        )
        .mount(&server)
        .await;

    let config = ProviderConfig::new("test-key", "gpt-4o-mini").with_base_url(server.uri());
    let provider = OpenAiChat::new(config).unwrap();

    let token = CancellationToken::new();
    let send = provider.send("make a page", token.clone());
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = send.await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn anthropic_returns_the_first_text_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "text", "text": ""},
                {"type": "text", "text": "{\"appName\": \"Bar\"}"}
            ]
        })))
        .mount(&server)
        .await;

    let config = ProviderConfig::new("test-key", "claude-sonnet-4-5")
        .with_base_url(format!("{}/v1/messages", server.uri()));
    let provider = AnthropicChat::new(config).unwrap();

    let reply = provider
        .send("make a page", CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(reply, "{\"appName\": \"Bar\"}");
}

#[tokio::test]
async fn ollama_requests_a_non_streaming_generation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"model": "llama3", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "{\"appName\": \"Baz\"}",
            "done": true
        })))
        .mount(&server)
        .await;

    let provider = OllamaChat::with_options("llama3", format!("{}/api/generate", server.uri()));

    let reply = provider
        .send("make a page", CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(reply, "{\"appName\": \"Baz\"}");
}
