//! Mouse control tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use frankie_protocols::automation::{Automation, MouseButton, ScreenPoint};
use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

use super::automation_error;

#[derive(Debug, Deserialize)]
struct MoveParams {
    x: i32,
    y: i32,
}

/// Move the pointer to absolute logical coordinates.
pub struct MouseMoveTool {
    definition: ToolDefinition,
    automation: Arc<dyn Automation>,
}

impl MouseMoveTool {
    pub fn new(automation: Arc<dyn Automation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "desktop_mouse_move",
                "Desktop Mouse Move",
                "Move the mouse cursor to an absolute screen position",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "x": { "type": "integer" },
                    "y": { "type": "integer" }
                },
                "required": ["x", "y"]
            }))
            .with_risk_level(RiskLevel::High),
            automation,
        }
    }
}

#[async_trait]
impl Tool for MouseMoveTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: MoveParams = parse_params(params)?;
        let point = ScreenPoint::new(params.x, params.y);
        self.automation
            .move_to(point)
            .await
            .map_err(automation_error)?;
        Ok(ToolResult::success(format!("Moved mouse to {point}")))
    }
}

#[derive(Debug, Deserialize)]
struct ClickParams {
    x: i32,
    y: i32,
    #[serde(default)]
    button: MouseButton,
    #[serde(default)]
    double: bool,
}

/// Click (or double-click) at a screen position.
pub struct MouseClickTool {
    definition: ToolDefinition,
    automation: Arc<dyn Automation>,
}

impl MouseClickTool {
    pub fn new(automation: Arc<dyn Automation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "desktop_mouse_click",
                "Desktop Mouse Click",
                "Click at a screen position. Prefer coordinates reported by analyze_screen or desktop_find_text",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "x": { "type": "integer" },
                    "y": { "type": "integer" },
                    "button": {
                        "type": "string",
                        "enum": ["left", "right", "middle"],
                        "default": "left"
                    },
                    "double": {
                        "type": "boolean",
                        "description": "Double-click with the left button",
                        "default": false
                    }
                },
                "required": ["x", "y"]
            }))
            .with_risk_level(RiskLevel::High),
            automation,
        }
    }
}

#[async_trait]
impl Tool for MouseClickTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ClickParams = parse_params(params)?;
        let point = ScreenPoint::new(params.x, params.y);
        let outcome = if params.double {
            self.automation.double_click(point).await
        } else {
            self.automation.click(point, params.button).await
        };
        outcome.map_err(automation_error)?;

        let what = if params.double { "Double-clicked" } else { "Clicked" };
        Ok(ToolResult::success(format!("{what} at {point}")))
    }
}
