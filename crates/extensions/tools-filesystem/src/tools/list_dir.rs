//! List directory tool.

use async_trait::async_trait;
use serde::Deserialize;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

#[derive(Debug, Deserialize)]
struct ListDirectoryParams {
    #[serde(default = "default_path")]
    path: String,
    /// Maximum depth to recurse.
    #[serde(default = "default_depth")]
    depth: usize,
}

fn default_path() -> String {
    ".".to_string()
}

fn default_depth() -> usize {
    1
}

/// List directory tool implementation.
pub struct ListDirectoryTool {
    definition: ToolDefinition,
}

impl ListDirectoryTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory to list (default: working directory)"
                },
                "depth": {
                    "type": "integer",
                    "description": "Maximum depth to recurse (default: 1)"
                }
            }
        });

        Self {
            definition: ToolDefinition::new(
                "list_dir",
                "List Directory",
                "List contents of a directory",
            )
            .with_parameters_schema(schema)
            .with_risk_level(RiskLevel::Low),
        }
    }
}

impl Default for ListDirectoryTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ListDirectoryTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ListDirectoryParams = parse_params(params)?;
        let path = ctx.resolve_path(&params.path);

        if !path.exists() {
            return Err(ToolError::NotFound(format!(
                "Directory not found: {}",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(ToolError::ExecutionFailed(format!(
                "Not a directory: {}",
                path.display()
            )));
        }

        let mut entries = Vec::new();
        for entry in walkdir::WalkDir::new(&path)
            .max_depth(params.depth.max(1))
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
            let relative = entry.path().strip_prefix(&path).unwrap_or(entry.path());
            if relative.as_os_str().is_empty() {
                continue;
            }

            let prefix = if entry.file_type().is_dir() { "📁" } else { "📄" };
            entries.push(format!("{} {}", prefix, relative.display()));
        }

        if entries.is_empty() {
            return Ok(ToolResult::success("(empty directory)"));
        }
        Ok(ToolResult::success(entries.join("\n")))
    }
}
