//! Write file tool.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

#[derive(Debug, Deserialize)]
struct WriteFileParams {
    path: String,
    content: String,
    /// Append instead of overwriting.
    #[serde(default)]
    append: bool,
}

/// Write file tool implementation.
pub struct WriteFileTool {
    definition: ToolDefinition,
}

impl WriteFileTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the file to write"
                },
                "content": {
                    "type": "string",
                    "description": "Content to write to the file"
                },
                "append": {
                    "type": "boolean",
                    "description": "Append to the file instead of overwriting (default: false)"
                }
            },
            "required": ["path", "content"]
        });

        Self {
            definition: ToolDefinition::new(
                "write_file",
                "Write File",
                "Write content to a file, creating parent directories as needed",
            )
            .with_parameters_schema(schema)
            .with_risk_level(RiskLevel::High),
        }
    }
}

impl Default for WriteFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WriteFileTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: WriteFileParams = parse_params(params)?;
        let path = ctx.resolve_path(&params.path);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        if params.append {
            use tokio::io::AsyncWriteExt;
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await?;
            file.write_all(params.content.as_bytes()).await?;
        } else {
            tokio::fs::write(&path, &params.content).await?;
        }
        info!(path = %path.display(), bytes = params.content.len(), "Wrote file");

        Ok(ToolResult::success(format!(
            "Successfully wrote {} bytes to {}",
            params.content.len(),
            path.display()
        )))
    }
}
