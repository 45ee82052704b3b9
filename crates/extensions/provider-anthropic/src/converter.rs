//! Message and tool conversion utilities.

use frankie_protocols::provider::CompletionRequest;
use frankie_protocols::types::{Message, MessageRole};

use crate::api::{ApiContent, ApiMessage, ApiTool, ContentBlock};

/// Convert messages to Anthropic API format.
///
/// System messages are dropped (the system prompt travels separately) and
/// consecutive tool results are merged into a single user turn, which is how
/// the API expects the answers to one assistant turn's tool calls.
pub fn convert_messages(messages: &[Message]) -> Vec<ApiMessage> {
    let mut converted: Vec<ApiMessage> = Vec::new();

    for message in messages.iter().filter(|m| m.role != MessageRole::System) {
        if message.role == MessageRole::Tool {
            let block = tool_result_block(message);
            if let Some(ApiMessage {
                role,
                content: ApiContent::Blocks(blocks),
            }) = converted.last_mut()
            {
                let previous_is_results = role.as_str() == "user"
                    && blocks
                        .iter()
                        .all(|b| matches!(b, ContentBlock::ToolResult { .. }));
                if previous_is_results {
                    blocks.push(block);
                    continue;
                }
            }
            converted.push(ApiMessage {
                role: "user".to_string(),
                content: ApiContent::Blocks(vec![block]),
            });
            continue;
        }

        converted.push(ApiMessage {
            role: match message.role {
                MessageRole::Assistant => "assistant".to_string(),
                _ => "user".to_string(),
            },
            content: convert_content(message),
        });
    }

    converted
}

fn tool_result_block(message: &Message) -> ContentBlock {
    ContentBlock::ToolResult {
        tool_use_id: message.tool_call_id.clone().unwrap_or_default(),
        content: message.content.clone(),
        is_error: message.is_error,
    }
}

/// Convert a single non-tool message's content.
pub fn convert_content(message: &Message) -> ApiContent {
    if message.thinking.is_empty() && message.tool_calls.is_empty() {
        return ApiContent::Text(message.content.clone());
    }

    // Thinking blocks must come first, exactly as the model produced them.
    let mut blocks: Vec<ContentBlock> = message
        .thinking
        .iter()
        .map(|t| ContentBlock::Thinking {
            thinking: t.thinking.clone(),
            signature: t.signature.clone(),
        })
        .collect();

    if !message.content.is_empty() {
        blocks.push(ContentBlock::Text {
            text: message.content.clone(),
        });
    }
    for tc in &message.tool_calls {
        blocks.push(ContentBlock::ToolUse {
            id: tc.id.clone(),
            name: tc.name.clone(),
            input: tc.arguments.clone(),
        });
    }
    ApiContent::Blocks(blocks)
}

/// Convert tools to Anthropic API format.
pub fn convert_tools(request: &CompletionRequest) -> Vec<ApiTool> {
    request
        .tools
        .iter()
        .map(|t| ApiTool {
            name: t.id.clone(),
            description: t.description.clone(),
            input_schema: t.input_schema(),
        })
        .collect()
}

#[cfg(test)]
#[path = "converter_tests.rs"]
mod tests;
