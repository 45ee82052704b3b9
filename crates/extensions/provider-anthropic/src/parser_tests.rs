use super::*;
use crate::api::ApiUsage;

fn response(content: Vec<ContentBlock>, stop_reason: Option<&str>) -> ApiResponse {
    ApiResponse {
        id: "msg_123".to_string(),
        model: "claude-sonnet-4-20250514".to_string(),
        content,
        stop_reason: stop_reason.map(String::from),
        usage: ApiUsage {
            input_tokens: 10,
            output_tokens: 5,
        },
    }
}

#[test]
fn test_parse_response_text_only() {
    let parsed = parse_response(response(
        vec![ContentBlock::Text {
            text: "Hello, world!".to_string(),
        }],
        Some("end_turn"),
    ));
    assert_eq!(parsed.id, "msg_123");
    assert_eq!(parsed.message.content, "Hello, world!");
    assert!(parsed.message.tool_calls.is_empty());
    assert_eq!(parsed.stop_reason, StopReason::EndTurn);
    assert_eq!(parsed.usage.total(), 15);
}

#[test]
fn test_parse_response_joins_text_blocks() {
    let parsed = parse_response(response(
        vec![
            ContentBlock::Text {
                text: "Hello, ".to_string(),
            },
            ContentBlock::Text {
                text: "world".to_string(),
            },
        ],
        Some("end_turn"),
    ));
    assert_eq!(parsed.message.content, "Hello, world");
}

#[test]
fn test_parse_response_with_thinking_and_tool_use() {
    let parsed = parse_response(response(
        vec![
            ContentBlock::Thinking {
                thinking: "Need the browser".to_string(),
                signature: "sig".to_string(),
            },
            ContentBlock::ToolUse {
                id: "toolu_abc".to_string(),
                name: "use_browser_agent".to_string(),
                input: serde_json::json!({"query": "rust news"}),
            },
        ],
        Some("tool_use"),
    ));

    assert_eq!(parsed.stop_reason, StopReason::ToolUse);
    assert_eq!(parsed.message.thinking.len(), 1);
    assert_eq!(parsed.message.thinking[0].signature, "sig");
    assert_eq!(parsed.message.tool_calls.len(), 1);
    assert_eq!(parsed.message.tool_calls[0].name, "use_browser_agent");
    assert_eq!(parsed.message.tool_calls[0].arguments["query"], "rust news");
}

#[test]
fn test_parse_response_ignores_unknown_blocks() {
    let parsed = parse_response(response(
        vec![
            ContentBlock::Other,
            ContentBlock::Text {
                text: "ok".to_string(),
            },
        ],
        Some("end_turn"),
    ));
    assert_eq!(parsed.message.content, "ok");
}

#[test]
fn test_missing_stop_reason_ends_turn() {
    let parsed = parse_response(response(vec![], None));
    assert_eq!(parsed.stop_reason, StopReason::EndTurn);
}

#[test]
fn test_max_tokens_stop_reason() {
    let parsed = parse_response(response(vec![], Some("max_tokens")));
    assert_eq!(parsed.stop_reason, StopReason::MaxTokens);
}
