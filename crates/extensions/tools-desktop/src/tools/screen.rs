//! Screen capture and OCR tools.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use frankie_protocols::automation::Automation;
use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};

use crate::automation::DesktopAutomation;

use super::automation_error;

#[derive(Debug, Default, Deserialize)]
struct ScreenshotParams {
    /// Output file; defaults to `screenshots/screenshot-<timestamp>.png`.
    #[serde(default)]
    path: Option<String>,
}

fn default_screenshot_path(ctx: &ToolContext) -> PathBuf {
    ctx.work_dir.join("screenshots").join(format!(
        "screenshot-{}.png",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

/// Save a PNG of the primary display.
pub struct ScreenshotTool {
    definition: ToolDefinition,
    desktop: Arc<DesktopAutomation>,
}

impl ScreenshotTool {
    pub fn new(desktop: Arc<DesktopAutomation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "desktop_screenshot",
                "Desktop Screenshot",
                "Capture the primary display to a PNG file and return its path and size",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Optional output path" }
                }
            })),
            desktop,
        }
    }
}

#[async_trait]
impl Tool for ScreenshotTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ScreenshotParams = if params.is_null() {
            ScreenshotParams::default()
        } else {
            parse_params(params)?
        };
        let path = match params.path {
            Some(p) => ctx.resolve_path(&p),
            None => default_screenshot_path(&ctx),
        };

        let shot = self.desktop.capture().await.map_err(automation_error)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &shot.png).await?;
        info!("Saved screenshot to {}", path.display());

        let out = serde_json::json!({
            "path": path.display().to_string(),
            "width": shot.width,
            "height": shot.height,
            "scale": shot.scale,
        });
        Ok(ToolResult::success(out.to_string()))
    }
}

/// OCR the whole screen: text lines plus clickable word positions.
pub struct AnalyzeScreenTool {
    definition: ToolDefinition,
    desktop: Arc<DesktopAutomation>,
}

impl AnalyzeScreenTool {
    pub fn new(desktop: Arc<DesktopAutomation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "analyze_screen",
                "Analyze Screen",
                "Read all visible text with OCR. Returns text lines and the logical screen \
                 coordinates of each word, ready for desktop_mouse_click. Use this before clicking",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {}
            })),
            desktop,
        }
    }
}

#[async_trait]
impl Tool for AnalyzeScreenTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let text = self.desktop.read_screen().await.map_err(automation_error)?;
        let out =
            serde_json::to_string(&text).map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        Ok(ToolResult::success(out))
    }
}

#[derive(Debug, Deserialize)]
struct FindTextParams {
    label: String,
}

/// Locate a text label on screen.
pub struct FindTextTool {
    definition: ToolDefinition,
    automation: Arc<dyn Automation>,
}

impl FindTextTool {
    pub fn new(automation: Arc<dyn Automation>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "desktop_find_text",
                "Desktop Find Text",
                "Find a visible text label (button, menu item, tab) and return the point to click",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "label": { "type": "string" }
                },
                "required": ["label"]
            })),
            automation,
        }
    }
}

#[async_trait]
impl Tool for FindTextTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: FindTextParams = parse_params(params)?;
        let found = self
            .automation
            .locate_text(&params.label)
            .await
            .map_err(automation_error)?;
        Ok(match found {
            Some(point) => ToolResult::success(
                serde_json::json!({ "label": params.label, "x": point.x, "y": point.y })
                    .to_string(),
            ),
            None => ToolResult::error(format!("\"{}\" is not visible on screen", params.label)),
        })
    }
}
