//! Slack Web API tool.
//!
//! Calls any Web API method (`chat.postMessage`, `conversations.list`, ...)
//! with the configured bot token.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use frankie_config::SlackConfig;
use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

static METHOD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(\.[A-Za-z]+)+$").expect("valid regex"));

#[derive(Debug, Deserialize)]
struct SlackParams {
    /// Web API method, e.g. `chat.postMessage`.
    action: String,
    #[serde(default)]
    parameters: serde_json::Map<String, serde_json::Value>,
}

pub struct SlackTool {
    definition: ToolDefinition,
    client: Client,
    token: Option<String>,
    default_channel: Option<String>,
    api_base: String,
}

impl SlackTool {
    pub fn from_config(config: &SlackConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        let definition = ToolDefinition::new(
            "slack",
            "Slack",
            "Call a Slack Web API method such as chat.postMessage, conversations.list \
             or conversations.history",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "description": "Slack Web API method name, e.g. chat.postMessage"
                },
                "parameters": {
                    "type": "object",
                    "description": "Arguments for the method (channel, text, limit, ...)"
                }
            },
            "required": ["action"]
        }))
        .with_risk_level(RiskLevel::Medium);

        Self {
            definition,
            client,
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
            default_channel: config.default_channel.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn prepare(
        &self,
        action: &str,
        mut parameters: serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Map<String, serde_json::Value>, ToolError> {
        if !METHOD_NAME.is_match(action) {
            return Err(ToolError::InvalidParameters(format!(
                "'{action}' is not a Slack API method name"
            )));
        }
        if action.starts_with("chat.") && !parameters.contains_key("channel") {
            let channel = self.default_channel.as_ref().ok_or_else(|| {
                ToolError::InvalidParameters(
                    "No channel given and no default Slack channel configured".to_string(),
                )
            })?;
            parameters.insert("channel".to_string(), channel.clone().into());
        }
        Ok(parameters)
    }
}

#[async_trait]
impl Tool for SlackTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: SlackParams = parse_params(params)?;
        let Some(token) = &self.token else {
            return Ok(ToolResult::error(
                "Slack is not configured: set SLACK_BOT_TOKEN or [slack].token",
            ));
        };
        let body = self.prepare(&params.action, params.parameters)?;
        debug!("slack: {}", params.action);

        let response = self
            .client
            .post(format!("{}/{}", self.api_base, params.action))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Slack request failed: {e}")))?;

        let status = response.status();
        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid Slack response: {e}")))?;

        if !status.is_success() || payload["ok"] != serde_json::Value::Bool(true) {
            let reason = payload["error"].as_str().unwrap_or("unknown_error");
            warn!("Slack {} failed: {} (HTTP {})", params.action, reason, status.as_u16());
            return Ok(ToolResult::error(format!(
                "Slack {} failed: {reason}",
                params.action
            )));
        }

        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        Ok(ToolResult::success(rendered))
    }
}
