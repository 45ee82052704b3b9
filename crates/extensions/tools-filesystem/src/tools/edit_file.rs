//! Edit file tool (search/replace).

use async_trait::async_trait;
use serde::Deserialize;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

#[derive(Debug, Deserialize)]
struct EditFileParams {
    path: String,
    old_string: String,
    new_string: String,
    #[serde(default)]
    replace_all: bool,
}

/// Edit file tool implementation (search/replace).
pub struct EditFileTool {
    definition: ToolDefinition,
}

impl EditFileTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the file to edit"
                },
                "old_string": {
                    "type": "string",
                    "description": "Text to search for (must be unique unless replace_all)"
                },
                "new_string": {
                    "type": "string",
                    "description": "Text to replace with"
                },
                "replace_all": {
                    "type": "boolean",
                    "description": "Replace all occurrences (default: false)"
                }
            },
            "required": ["path", "old_string", "new_string"]
        });

        Self {
            definition: ToolDefinition::new(
                "edit_file",
                "Edit File",
                "Edit a file by replacing text (search/replace)",
            )
            .with_parameters_schema(schema)
            .with_risk_level(RiskLevel::High),
        }
    }
}

impl Default for EditFileTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one search/replace edit, returning the new text and the match count.
fn apply_edit(
    content: &str,
    old: &str,
    new: &str,
    replace_all: bool,
) -> Result<(String, usize), ToolError> {
    if old.is_empty() {
        return Err(ToolError::InvalidParameters("old_string is empty".to_string()));
    }
    let count = content.matches(old).count();
    if count == 0 {
        return Err(ToolError::ExecutionFailed(format!(
            "Text not found in file: {old}"
        )));
    }
    if count > 1 && !replace_all {
        return Err(ToolError::ExecutionFailed(format!(
            "Text found {count} times. Use replace_all or provide more context."
        )));
    }

    let updated = if replace_all {
        content.replace(old, new)
    } else {
        content.replacen(old, new, 1)
    };
    Ok((updated, count))
}

#[async_trait]
impl Tool for EditFileTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: EditFileParams = parse_params(params)?;
        let path = ctx.resolve_path(&params.path);

        if !path.is_file() {
            return Err(ToolError::NotFound(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let content = tokio::fs::read_to_string(&path).await?;
        let (updated, count) = apply_edit(
            &content,
            &params.old_string,
            &params.new_string,
            params.replace_all,
        )?;
        tokio::fs::write(&path, &updated).await?;

        Ok(ToolResult::success(format!(
            "Successfully edited {} ({} replacement{})",
            path.display(),
            count,
            if count > 1 { "s" } else { "" }
        )))
    }
}

#[cfg(test)]
#[path = "edit_file_tests.rs"]
mod tests;
