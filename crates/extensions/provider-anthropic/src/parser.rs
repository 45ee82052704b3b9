//! Response parsing utilities.

use frankie_protocols::provider::CompletionResponse;
use frankie_protocols::types::{Message, StopReason, ThinkingBlock, ToolCall, Usage};

use crate::api::{ApiResponse, ContentBlock};

/// Parse API response to CompletionResponse.
pub fn parse_response(response: ApiResponse) -> CompletionResponse {
    let mut message = Message::assistant("");

    for block in response.content {
        match block {
            ContentBlock::Text { text } => message.content.push_str(&text),
            ContentBlock::Thinking {
                thinking,
                signature,
            } => message.thinking.push(ThinkingBlock {
                thinking,
                signature,
            }),
            ContentBlock::ToolUse { id, name, input } => message.tool_calls.push(ToolCall {
                id,
                name,
                arguments: input,
            }),
            ContentBlock::ToolResult { .. } | ContentBlock::Other => {}
        }
    }

    CompletionResponse {
        id: response.id,
        model: response.model,
        message,
        stop_reason: response
            .stop_reason
            .as_deref()
            .map(StopReason::parse)
            .unwrap_or(StopReason::EndTurn),
        usage: Usage {
            input_tokens: response.usage.input_tokens,
            output_tokens: response.usage.output_tokens,
        },
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
