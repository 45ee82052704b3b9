use super::*;
use frankie_protocols::provider::ThinkingConfig;
use frankie_protocols::tool::ToolDefinition;
use frankie_protocols::types::{Message, StopReason};

#[test]
fn test_provider_id_and_models() {
    let provider = AnthropicProvider::new("test-key".to_string());
    assert_eq!(provider.id(), "anthropic");
    assert!(provider.models().iter().any(|m| m.id.contains("claude")));
}

#[test]
fn test_from_config_requires_api_key() {
    let config = ModelConfig::default();
    let err = AnthropicProvider::from_config(&config).err().unwrap();
    assert!(matches!(err, ProviderError::AuthenticationFailed(_)));

    let config = ModelConfig {
        api_key: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(AnthropicProvider::from_config(&config).is_err());
}

#[test]
fn test_from_config_uses_base_url() {
    let config = ModelConfig {
        api_key: Some("sk-test".to_string()),
        base_url: "http://localhost:8080/".to_string(),
        ..Default::default()
    };
    let provider = AnthropicProvider::from_config(&config).unwrap();
    assert_eq!(provider.endpoint(), "http://localhost:8080/v1/messages");
    assert_eq!(provider.timeout_secs, 900);
}

#[test]
fn test_build_request_defaults() {
    let provider = AnthropicProvider::new("test-key".to_string());
    let request = CompletionRequest::new("claude-sonnet-4-20250514", vec![Message::user("Hello")]);

    let api_request = provider.build_request(&request);
    assert_eq!(api_request.max_tokens, 4096);
    assert!(api_request.thinking.is_none());
    assert!(api_request.tools.is_empty());
}

#[test]
fn test_build_request_drops_temperature_when_thinking() {
    let provider = AnthropicProvider::new("test-key".to_string());
    let mut request = CompletionRequest::new("claude-sonnet-4-20250514", vec![Message::user("Hi")])
        .with_max_tokens(10_000)
        .with_thinking(ThinkingConfig::enabled(2048));
    request.temperature = Some(0.7);

    let api_request = provider.build_request(&request);
    assert_eq!(api_request.thinking, Some(ThinkingConfig::enabled(2048)));
    assert!(api_request.temperature.is_none());
}

#[test]
fn test_build_request_with_tools() {
    let provider = AnthropicProvider::new("test-key".to_string());
    let request = CompletionRequest::new("m", vec![Message::user("Read file.txt")]).with_tools(
        vec![ToolDefinition::new("read_file", "Read File", "Read a file from disk")],
    );
    let api_request = provider.build_request(&request);
    assert_eq!(api_request.tools.len(), 1);
}

mod http_tests {
    use super::*;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    fn provider(server: &MockServer) -> AnthropicProvider {
        AnthropicProvider::new("test-key".to_string()).with_base_url(server.uri())
    }

    fn text_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "content": [{"type": "text", "text": text}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        })
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/v1/messages"))
            .and(matchers::header("x-api-key", "test-key"))
            .and(matchers::header("anthropic-version", API_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("Hello!")))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider(&server)
            .complete(CompletionRequest::new("claude-sonnet-4-20250514", vec![Message::user("Hi")]))
            .await
            .unwrap();

        assert_eq!(response.message.content, "Hello!");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.total(), 15);
    }

    #[tokio::test]
    async fn test_complete_sends_thinking_and_beta_header() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::header("anthropic-beta", "interleaved-thinking-2025-05-14"))
            .and(matchers::body_partial_json(serde_json::json!({
                "thinking": {"type": "enabled", "budget_tokens": 2048},
                "max_tokens": 10000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "msg_think",
                "model": "claude-sonnet-4-20250514",
                "content": [
                    {"type": "thinking", "thinking": "pondering", "signature": "abc"},
                    {"type": "text", "text": "Answer"}
                ],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 20, "output_tokens": 40}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = CompletionRequest::new("claude-sonnet-4-20250514", vec![Message::user("Q")])
            .with_max_tokens(10_000)
            .with_thinking(ThinkingConfig::enabled(2048))
            .with_betas(vec!["interleaved-thinking-2025-05-14".to_string()]);
        let response = provider(&server).complete(request).await.unwrap();

        assert_eq!(response.message.content, "Answer");
        assert_eq!(response.message.thinking[0].thinking, "pondering");
    }

    #[tokio::test]
    async fn test_complete_with_tool_use() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "msg_tool",
                "model": "claude-sonnet-4-20250514",
                "content": [{
                    "type": "tool_use",
                    "id": "toolu_1",
                    "name": "current_time",
                    "input": {"timezone": "UTC"}
                }],
                "stop_reason": "tool_use",
                "usage": {"input_tokens": 5, "output_tokens": 5}
            })))
            .mount(&server)
            .await;

        let response = provider(&server)
            .complete(CompletionRequest::new("m", vec![Message::user("time?")]))
            .await
            .unwrap();
        assert_eq!(response.stop_reason, StopReason::ToolUse);
        assert_eq!(response.message.tool_calls[0].arguments["timezone"], "UTC");
    }

    #[tokio::test]
    async fn test_complete_auth_error() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            })))
            .mount(&server)
            .await;

        let err = provider(&server)
            .complete(CompletionRequest::new("m", vec![Message::user("Hi")]))
            .await
            .unwrap_err();
        match err {
            ProviderError::AuthenticationFailed(msg) => assert_eq!(msg, "invalid x-api-key"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .complete(CompletionRequest::new("m", vec![Message::user("Hi")]))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::RateLimited { .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_complete_overloaded() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(529).set_body_json(serde_json::json!({
                "type": "error",
                "error": {"type": "overloaded_error", "message": "Overloaded"}
            })))
            .mount(&server)
            .await;

        let err = provider(&server)
            .complete(CompletionRequest::new("m", vec![Message::user("Hi")]))
            .await
            .unwrap_err();
        assert!(err.is_throttling());
    }

    #[tokio::test]
    async fn test_complete_server_error() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .complete(CompletionRequest::new("m", vec![Message::user("Hi")]))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ApiError { status: 500, .. }));
    }
}
