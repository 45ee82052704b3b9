//! Knowledge base tools: `memory` (store/get/list/delete) and `retrieve`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use frankie_protocols::error::ToolError;
use frankie_protocols::memory::{MemoryBackend, MemoryEntry, MemoryQuery, MemorySearchResult};
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

// ---------------------------------------------------------------------------
// memory
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum MemoryAction {
    Store {
        content: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        tags: Vec<String>,
    },
    Get {
        id: String,
    },
    List {
        #[serde(default = "default_list_limit")]
        limit: usize,
    },
    Delete {
        id: String,
    },
}

fn default_list_limit() -> usize {
    20
}

/// Title used when the caller supplies none: the first line, capped at 60 chars.
fn derive_title(content: &str) -> String {
    let first = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    match first.char_indices().nth(60) {
        Some((cut, _)) => format!("{}...", &first[..cut]),
        None => first.to_string(),
    }
}

fn render_entry(entry: &MemoryEntry) -> String {
    let tags = if entry.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", entry.tags.join(", "))
    };
    format!(
        "{} | {} | {}{}\n{}",
        entry.id.as_deref().unwrap_or("?"),
        entry.created_at.format("%Y-%m-%d %H:%M"),
        entry.title,
        tags,
        entry.content
    )
}

/// Manage knowledge base entries.
pub struct MemoryTool {
    definition: ToolDefinition,
    backend: Arc<dyn MemoryBackend>,
}

impl MemoryTool {
    pub fn new(backend: Arc<dyn MemoryBackend>) -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["store", "get", "list", "delete"],
                    "description": "Operation to perform"
                },
                "content": {
                    "type": "string",
                    "description": "Text to store (action=store)"
                },
                "title": {
                    "type": "string",
                    "description": "Optional title (action=store)"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Tags (action=store)"
                },
                "id": {
                    "type": "string",
                    "description": "Entry id (action=get or delete)"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum entries to list (default 20)"
                }
            },
            "required": ["action"]
        });

        Self {
            definition: ToolDefinition::new(
                "memory",
                "Knowledge Base",
                "Store, fetch, list, or delete entries in the personal knowledge base.",
            )
            .with_parameters_schema(schema)
            .with_risk_level(RiskLevel::Medium),
            backend,
        }
    }
}

#[async_trait]
impl Tool for MemoryTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let action: MemoryAction = parse_params(params)?;
        debug!("memory: {:?}", action);

        let failed = |e: frankie_protocols::error::MemoryError| {
            ToolError::ExecutionFailed(format!("Knowledge base error: {e}"))
        };

        match action {
            MemoryAction::Store { content, title, tags } => {
                if content.trim().is_empty() {
                    return Err(ToolError::InvalidParameters(
                        "content must not be empty".to_string(),
                    ));
                }
                let title = title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| derive_title(&content));
                let id = self
                    .backend
                    .store(MemoryEntry::new(title, content).with_tags(tags))
                    .await
                    .map_err(failed)?;
                Ok(ToolResult::success(format!("Stored entry {id}")))
            }
            MemoryAction::Get { id } => match self.backend.retrieve(&id).await.map_err(failed)? {
                Some(entry) => Ok(ToolResult::success(render_entry(&entry))),
                None => Ok(ToolResult::error(format!("No entry with id {id}"))),
            },
            MemoryAction::List { limit } => {
                let entries = self.backend.list(limit).await.map_err(failed)?;
                if entries.is_empty() {
                    return Ok(ToolResult::success("The knowledge base is empty."));
                }
                let body: Vec<String> = entries.iter().map(render_entry).collect();
                Ok(ToolResult::success(format!(
                    "{} entries:\n\n{}",
                    entries.len(),
                    body.join("\n---\n")
                )))
            }
            MemoryAction::Delete { id } => {
                self.backend.delete(&id).await.map_err(failed)?;
                Ok(ToolResult::success(format!("Deleted entry {id}")))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// retrieve
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RetrieveParams {
    text: String,
    #[serde(default = "default_results")]
    number_of_results: usize,
    #[serde(default = "default_min_score")]
    min_score: f32,
}

fn default_results() -> usize {
    5
}

fn default_min_score() -> f32 {
    0.4
}

fn render_results(results: &[MemorySearchResult]) -> String {
    let mut out = format!("Retrieved {} results:\n", results.len());
    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. (score {:.2}) {}\n",
            i + 1,
            result.score,
            render_entry(&result.entry)
        ));
    }
    out
}

/// Relevance search over the knowledge base.
pub struct RetrieveTool {
    definition: ToolDefinition,
    backend: Arc<dyn MemoryBackend>,
}

impl RetrieveTool {
    pub fn new(backend: Arc<dyn MemoryBackend>) -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "What to look for"
                },
                "number_of_results": {
                    "type": "integer",
                    "description": "Maximum results (default 5)"
                },
                "min_score": {
                    "type": "number",
                    "description": "Minimum relevance 0.0-1.0 (default 0.4)"
                }
            },
            "required": ["text"]
        });

        Self {
            definition: ToolDefinition::new(
                "retrieve",
                "Retrieve",
                "Search the knowledge base for entries relevant to a query.",
            )
            .with_parameters_schema(schema),
            backend,
        }
    }
}

#[async_trait]
impl Tool for RetrieveTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: RetrieveParams = parse_params(params)?;
        let query = MemoryQuery::text(&params.text)
            .with_limit(params.number_of_results.max(1))
            .with_min_score(params.min_score);

        let results = self
            .backend
            .search(query)
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Knowledge base error: {e}")))?;
        debug!("retrieve: {:?} -> {} results", params.text, results.len());

        if results.is_empty() {
            return Ok(ToolResult::success(format!(
                "No entries matched \"{}\".",
                params.text
            )));
        }
        Ok(ToolResult::success(render_results(&results)))
    }
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
