//! Open a URL in the user's default browser.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::info;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

use super::http_request::parse_http_url;

#[derive(Debug, Deserialize)]
struct OpenParams {
    url: String,
}

fn default_launcher() -> Vec<String> {
    let argv: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(target_os = "windows") {
        &["cmd", "/C", "start", ""]
    } else {
        &["xdg-open"]
    };
    argv.iter().map(|s| s.to_string()).collect()
}

pub struct OpenUrlTool {
    definition: ToolDefinition,
    launcher: Vec<String>,
}

impl OpenUrlTool {
    pub fn new() -> Self {
        Self::with_launcher(default_launcher())
    }

    /// Use a specific command; the URL is appended as the last argument.
    pub fn with_launcher(launcher: Vec<String>) -> Self {
        let definition = ToolDefinition::new(
            "open_url",
            "Open URL",
            "Open a web page in the default browser so the user can see it",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string", "description": "Absolute http(s) URL" }
            },
            "required": ["url"]
        }))
        .with_risk_level(RiskLevel::Low);

        Self {
            definition,
            launcher,
        }
    }
}

impl Default for OpenUrlTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for OpenUrlTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: OpenParams = parse_params(params)?;
        let url = parse_http_url(&params.url)?;

        let (program, args) = self
            .launcher
            .split_first()
            .ok_or_else(|| ToolError::ExecutionFailed("No browser launcher configured".into()))?;

        let status = Command::new(program)
            .args(args)
            .arg(url.as_str())
            .status()
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Failed to run {program}: {e}")))?;

        if !status.success() {
            return Ok(ToolResult::error(format!(
                "{program} exited with {}",
                status.code().unwrap_or(-1)
            )));
        }
        info!("Opened {} in browser", url);
        Ok(ToolResult::success(format!("Opened {url}")))
    }
}
