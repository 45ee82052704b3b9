//! Hosted model, retry and agent-loop settings.

use serde::{Deserialize, Serialize};

/// Hosted model client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier sent to the API.
    #[serde(default = "default_model_id")]
    pub id: String,

    /// Output token ceiling per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// API key. Usually supplied through `ANTHROPIC_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub read_timeout_secs: u64,

    #[serde(default)]
    pub thinking: ThinkingSettings,
}

fn default_model_id() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    10_000
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout_secs() -> u64 {
    900
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: default_model_id(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: default_base_url(),
            connect_timeout_secs: default_timeout_secs(),
            read_timeout_secs: default_timeout_secs(),
            thinking: ThinkingSettings::default(),
        }
    }
}

/// Extended thinking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThinkingSettings {
    /// "enabled" or "disabled".
    #[serde(default = "default_thinking_type", rename = "type")]
    pub thinking_type: String,

    #[serde(default = "default_budget_tokens")]
    pub budget_tokens: u32,
}

fn default_thinking_type() -> String {
    "enabled".to_string()
}

fn default_budget_tokens() -> u32 {
    2048
}

impl ThinkingSettings {
    pub fn is_enabled(&self) -> bool {
        self.thinking_type.eq_ignore_ascii_case("enabled")
    }
}

impl Default for ThinkingSettings {
    fn default() -> Self {
        Self {
            thinking_type: default_thinking_type(),
            budget_tokens: default_budget_tokens(),
        }
    }
}

/// Retry policy for hosted model calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    #[serde(default = "default_multiplier")]
    pub backoff_multiplier: f64,

    /// Back off harder when the service reports throttling.
    #[serde(default = "super::default_true")]
    pub adaptive: bool,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    30_000
}

fn default_multiplier() -> f64 {
    2.0
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_multiplier(),
            adaptive: true,
        }
    }
}

/// Limits for the tool-calling loop of every agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,

    #[serde(default = "default_agent_timeout")]
    pub timeout_secs: u64,

    /// Tool output longer than this is truncated before it goes back to the model.
    #[serde(default = "default_max_tool_output_chars")]
    pub max_tool_output_chars: usize,
}

fn default_max_turns() -> u32 {
    25
}

fn default_agent_timeout() -> u64 {
    900
}

fn default_max_tool_output_chars() -> usize {
    50_000
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
            timeout_secs: default_agent_timeout(),
            max_tool_output_chars: default_max_tool_output_chars(),
        }
    }
}
