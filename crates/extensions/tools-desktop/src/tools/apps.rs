//! Application launch tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use frankie_protocols::automation::Automation;
use frankie_protocols::error::{AutomationError, ToolError};
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

use super::automation_error;

#[derive(Debug, Deserialize)]
struct OpenAppParams {
    app: String,
}

/// Launch or focus an application by name.
pub struct OpenAppTool {
    definition: ToolDefinition,
    automation: Arc<dyn Automation>,
}

impl OpenAppTool {
    pub fn new(automation: Arc<dyn Automation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "open_app",
                "Open Application",
                "Launch or bring to front an application by name (e.g. \"Google Chrome\", \"Spotify\"). \
                 Faster and more reliable than clicking through the Dock or Start menu",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "app": { "type": "string", "description": "Application name" }
                },
                "required": ["app"]
            }))
            .with_risk_level(RiskLevel::Medium),
            automation,
        }
    }
}

#[async_trait]
impl Tool for OpenAppTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: OpenAppParams = parse_params(params)?;
        match self.automation.open_app(&params.app).await {
            Ok(()) => Ok(ToolResult::success(format!("Opened {}", params.app))),
            // Let the model try another name.
            Err(err @ AutomationError::AppLaunch { .. }) => {
                warn!("{}", err);
                Ok(ToolResult::error(err.to_string()))
            }
            Err(err) => Err(automation_error(err)),
        }
    }
}
