//! Keyboard control tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use frankie_protocols::automation::Automation;
use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

use super::automation_error;

#[derive(Debug, Deserialize)]
struct TypeParams {
    text: String,
}

/// Type literal text at the current focus.
pub struct TypeTextTool {
    definition: ToolDefinition,
    automation: Arc<dyn Automation>,
}

impl TypeTextTool {
    pub fn new(automation: Arc<dyn Automation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "desktop_keyboard_type",
                "Desktop Keyboard Type",
                "Type text into the focused window",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string" }
                },
                "required": ["text"]
            }))
            .with_risk_level(RiskLevel::High),
            automation,
        }
    }
}

#[async_trait]
impl Tool for TypeTextTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: TypeParams = parse_params(params)?;
        self.automation
            .type_text(&params.text)
            .await
            .map_err(automation_error)?;
        Ok(ToolResult::success(format!(
            "Typed {} characters",
            params.text.chars().count()
        )))
    }
}

#[derive(Debug, Deserialize)]
struct KeyParams {
    key: String,
}

/// Press and release one key.
pub struct KeyPressTool {
    definition: ToolDefinition,
    automation: Arc<dyn Automation>,
}

impl KeyPressTool {
    pub fn new(automation: Arc<dyn Automation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "desktop_keyboard_key",
                "Desktop Keyboard Key",
                "Press a single key such as enter, tab, escape, up or f5",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "key": { "type": "string" }
                },
                "required": ["key"]
            }))
            .with_risk_level(RiskLevel::High),
            automation,
        }
    }
}

#[async_trait]
impl Tool for KeyPressTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: KeyParams = parse_params(params)?;
        self.automation
            .press(&params.key)
            .await
            .map_err(automation_error)?;
        Ok(ToolResult::success(format!("Pressed {}", params.key)))
    }
}

#[derive(Debug, Deserialize)]
struct HotkeyParams {
    keys: Vec<String>,
}

/// Press a key combination, modifiers first.
pub struct HotkeyTool {
    definition: ToolDefinition,
    automation: Arc<dyn Automation>,
}

impl HotkeyTool {
    pub fn new(automation: Arc<dyn Automation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "desktop_keyboard_hotkey",
                "Desktop Keyboard Hotkey",
                "Press a key combination, modifiers first, e.g. [\"cmd\", \"shift\", \"5\"]",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "keys": {
                        "type": "array",
                        "items": { "type": "string" },
                        "minItems": 1
                    }
                },
                "required": ["keys"]
            }))
            .with_risk_level(RiskLevel::High),
            automation,
        }
    }
}

#[async_trait]
impl Tool for HotkeyTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: HotkeyParams = parse_params(params)?;
        if params.keys.is_empty() {
            return Err(ToolError::InvalidParameters(
                "keys must not be empty".to_string(),
            ));
        }
        self.automation
            .hotkey(&params.keys)
            .await
            .map_err(automation_error)?;
        Ok(ToolResult::success(format!(
            "Pressed {}",
            params.keys.join("+")
        )))
    }
}
