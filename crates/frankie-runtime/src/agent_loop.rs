//! The tool-calling loop.
//!
//! One call to [`AgentLoop::run`] sends the query to the model, executes every
//! tool the model asks for, feeds the results back and repeats until the model
//! ends its turn. Thinking blocks ride along on the assistant message so the
//! next request can echo them back.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use frankie_config::{AgentsConfig, ModelConfig};
use frankie_core::ToolRegistry;
use frankie_protocols::error::{AgentError, ToolError};
use frankie_protocols::provider::{CompletionRequest, LLMProvider, ThinkingConfig};
use frankie_protocols::tool::ToolContext;
use frankie_protocols::types::{Message, RiskLevel, StopReason, ToolCall, Usage};

/// Beta flag sent whenever thinking is on, so thinking may interleave with tool use.
pub const INTERLEAVED_THINKING_BETA: &str = "interleaved-thinking-2025-05-14";

/// Configuration for the agent loop.
#[derive(Debug, Clone)]
pub struct AgentLoopConfig {
    pub model: String,
    pub max_tokens: u32,
    pub thinking: Option<ThinkingConfig>,
    pub betas: Vec<String>,
    pub max_turns: u32,
    pub timeout_seconds: u64,
    /// Tool output longer than this is cut; 0 disables the limit.
    pub max_tool_output_chars: usize,
    /// Run high-risk tools without asking.
    pub bypass_consent: bool,
    pub work_dir: PathBuf,
}

impl Default for AgentLoopConfig {
    fn default() -> Self {
        Self::from_settings(&ModelConfig::default(), &AgentsConfig::default(), true)
    }
}

impl AgentLoopConfig {
    /// Build from the `[model]` and `[agents]` config sections.
    pub fn from_settings(model: &ModelConfig, agents: &AgentsConfig, bypass_consent: bool) -> Self {
        let thinking = model
            .thinking
            .is_enabled()
            .then(|| ThinkingConfig::enabled(model.thinking.budget_tokens));
        let betas = if thinking.is_some() {
            vec![INTERLEAVED_THINKING_BETA.to_string()]
        } else {
            Vec::new()
        };

        Self {
            model: model.id.clone(),
            max_tokens: model.max_tokens,
            thinking,
            betas,
            max_turns: agents.max_turns,
            timeout_seconds: agents.timeout_secs,
            max_tool_output_chars: agents.max_tool_output_chars,
            bypass_consent,
            work_dir: std::env::current_dir().unwrap_or_default(),
        }
    }

    pub fn with_work_dir(mut self, work_dir: PathBuf) -> Self {
        self.work_dir = work_dir;
        self
    }
}

/// What a finished loop produced.
#[derive(Debug, Clone)]
pub struct LoopOutcome {
    /// Text of the final assistant message.
    pub text: String,
    pub turns: u32,
    pub usage: Usage,
    /// Full transcript, starting with the user query.
    pub messages: Vec<Message>,
}

/// The agentic loop executor.
pub struct AgentLoop {
    provider: Arc<dyn LLMProvider>,
    tools: Arc<ToolRegistry>,
    system_prompt: String,
    config: AgentLoopConfig,
}

impl AgentLoop {
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        tools: Arc<ToolRegistry>,
        system_prompt: impl Into<String>,
        config: AgentLoopConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            system_prompt: system_prompt.into(),
            config,
        }
    }

    pub fn config(&self) -> &AgentLoopConfig {
        &self.config
    }

    pub fn tools(&self) -> &Arc<ToolRegistry> {
        &self.tools
    }

    /// Run the loop for one query, bounded by the configured timeout.
    pub async fn run(&self, query: &str) -> Result<LoopOutcome, AgentError> {
        let timeout = Duration::from_secs(self.config.timeout_seconds);
        match tokio::time::timeout(timeout, self.run_turns(query)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Agent loop timed out after {}s", self.config.timeout_seconds);
                Err(AgentError::Timeout(self.config.timeout_seconds))
            }
        }
    }

    async fn run_turns(&self, query: &str) -> Result<LoopOutcome, AgentError> {
        let mut messages = vec![Message::user(query)];
        let mut usage = Usage::default();
        let mut turn = 0;

        loop {
            if turn >= self.config.max_turns {
                return Err(AgentError::MaxTurnsExceeded(turn));
            }
            turn += 1;
            debug!("Agent loop turn {}", turn);

            let response = self.provider.complete(self.build_request(&messages)).await?;
            usage.add(&response.usage);
            let message = response.message;

            match response.stop_reason {
                StopReason::ToolUse if !message.tool_calls.is_empty() => {
                    let calls = message.tool_calls.clone();
                    messages.push(message);
                    for call in &calls {
                        messages.push(self.execute_tool(call).await);
                    }
                }
                stop_reason => {
                    if stop_reason == StopReason::MaxTokens {
                        warn!("Max tokens reached; returning partial answer");
                    }
                    info!("Agent completed after {} turns ({} tokens)", turn, usage.total());
                    let text = message.content.clone();
                    messages.push(message);
                    return Ok(LoopOutcome {
                        text,
                        turns: turn,
                        usage,
                        messages,
                    });
                }
            }
        }
    }

    fn build_request(&self, messages: &[Message]) -> CompletionRequest {
        let mut request = CompletionRequest::new(self.config.model.clone(), messages.to_vec())
            .with_tools(self.tools.list())
            .with_max_tokens(self.config.max_tokens)
            .with_betas(self.config.betas.clone());

        if !self.system_prompt.is_empty() {
            request = request.with_system(self.system_prompt.clone());
        }
        if let Some(thinking) = self.config.thinking {
            request = request.with_thinking(thinking);
        }
        request
    }

    /// Execute one tool call. Failures are reported back to the model, never raised.
    async fn execute_tool(&self, call: &ToolCall) -> Message {
        debug!("Executing tool: {} ({})", call.name, call.id);

        let Some(tool) = self.tools.get(&call.name) else {
            warn!("Model asked for unknown tool {}", call.name);
            return Message::tool_error(&call.id, ToolError::NotFound(call.name.clone()).to_string());
        };

        if tool.risk_level() == RiskLevel::High && !self.config.bypass_consent {
            warn!("Tool {} blocked: consent required", call.name);
            return Message::tool_error(
                &call.id,
                ToolError::ConsentRequired(call.name.clone()).to_string(),
            );
        }

        if let Err(e) = tool.validate(&call.arguments) {
            return Message::tool_error(&call.id, e.to_string());
        }

        let ctx = ToolContext::new(&call.id, self.config.work_dir.clone());
        match tool.execute(call.arguments.clone(), ctx).await {
            Ok(result) if result.success => {
                let content = truncate_output(&result.content, self.config.max_tool_output_chars);
                info!("Tool {} succeeded: {} chars", call.name, content.len());
                Message::tool(&call.id, content)
            }
            Ok(result) => {
                let text = result.into_text();
                warn!("Tool {} reported failure: {}", call.name, text);
                Message::tool_error(&call.id, text)
            }
            Err(e) => {
                warn!("Tool {} failed: {}", call.name, e);
                Message::tool_error(&call.id, format!("Error: {e}"))
            }
        }
    }
}

/// Cut `content` to at most `max` bytes on a char boundary, noting the cut.
pub fn truncate_output(content: &str, max: usize) -> String {
    if max == 0 || content.len() <= max {
        return content.to_string();
    }
    let mut boundary = max;
    while boundary > 0 && !content.is_char_boundary(boundary) {
        boundary -= 1;
    }
    format!(
        "{}\n\n[OUTPUT TRUNCATED: {} chars -> {}]",
        &content[..boundary],
        content.len(),
        max
    )
}

#[cfg(test)]
#[path = "agent_loop_tests.rs"]
mod tests;
