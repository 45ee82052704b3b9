//! Mermaid diagram generation.
//!
//! The model writes the Mermaid definition; this tool checks that it matches
//! the requested diagram kind, saves it under `diagrams/` as a `.mmd` file and
//! a `.md` preview, and returns both paths.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

/// Supported Mermaid diagram kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    Er,
    Gantt,
    Mindmap,
    Timeline,
}

impl DiagramKind {
    /// The Mermaid header keyword that opens a definition of this kind.
    pub fn header(&self) -> &'static str {
        match self {
            DiagramKind::Flowchart => "flowchart TD",
            DiagramKind::Sequence => "sequenceDiagram",
            DiagramKind::Class => "classDiagram",
            DiagramKind::State => "stateDiagram-v2",
            DiagramKind::Er => "erDiagram",
            DiagramKind::Gantt => "gantt",
            DiagramKind::Mindmap => "mindmap",
            DiagramKind::Timeline => "timeline",
        }
    }

    fn accepts(&self, first_line: &str) -> bool {
        let keyword = first_line.split_whitespace().next().unwrap_or_default();
        match self {
            DiagramKind::Flowchart => keyword == "flowchart" || keyword == "graph",
            DiagramKind::State => keyword.starts_with("stateDiagram"),
            other => keyword == other.header(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DiagramParams {
    title: String,
    kind: DiagramKind,
    /// Mermaid source; the header line may be omitted.
    definition: String,
    #[serde(default)]
    output_dir: Option<String>,
}

pub struct DiagramTool {
    definition: ToolDefinition,
}

impl DiagramTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "title": {"type": "string", "description": "Diagram title; also names the file"},
                "kind": {
                    "type": "string",
                    "enum": ["flowchart", "sequence", "class", "state", "er", "gantt", "mindmap", "timeline"]
                },
                "definition": {"type": "string", "description": "Mermaid source for the diagram"},
                "output_dir": {"type": "string", "description": "Directory to save into (default: diagrams)"}
            },
            "required": ["title", "kind", "definition"]
        });

        Self {
            definition: ToolDefinition::new(
                "diagram",
                "Diagram",
                "Create a Mermaid diagram (flowchart, sequence, class, state, ER, gantt, mindmap, timeline) and save it to disk",
            )
            .with_parameters_schema(schema)
            .with_risk_level(RiskLevel::Medium),
        }
    }
}

impl Default for DiagramTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase, dash-separated file stem for a title.
fn slugify(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() { "diagram".to_string() } else { slug }
}

/// Ensure the definition opens with a header of the requested kind.
fn normalize_definition(kind: DiagramKind, definition: &str) -> Result<String, ToolError> {
    let body = definition.trim();
    if body.is_empty() {
        return Err(ToolError::InvalidParameters("definition is empty".to_string()));
    }
    let first_line = body.lines().next().unwrap_or_default().trim();
    if kind.accepts(first_line) {
        return Ok(body.to_string());
    }

    let known = [
        "flowchart", "graph", "sequenceDiagram", "classDiagram", "stateDiagram",
        "stateDiagram-v2", "erDiagram", "gantt", "mindmap", "timeline",
    ];
    let keyword = first_line.split_whitespace().next().unwrap_or_default();
    if known.contains(&keyword) {
        return Err(ToolError::ValidationFailed(format!(
            "definition starts with '{keyword}' but kind is {kind:?}"
        )));
    }
    Ok(format!("{}\n{}", kind.header(), body))
}

#[async_trait]
impl Tool for DiagramTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: DiagramParams = parse_params(params)?;
        let source = normalize_definition(params.kind, &params.definition)?;

        let dir: PathBuf = ctx.resolve_path(params.output_dir.as_deref().unwrap_or("diagrams"));
        tokio::fs::create_dir_all(&dir).await?;

        let stem = slugify(&params.title);
        let mmd = dir.join(format!("{stem}.mmd"));
        let md = dir.join(format!("{stem}.md"));
        tokio::fs::write(&mmd, &source).await?;
        tokio::fs::write(&md, format!("# {}\n\n```mermaid\n{}\n```\n", params.title, source)).await?;
        info!(path = %mmd.display(), kind = ?params.kind, "Saved diagram");

        Ok(ToolResult::success(format!(
            "Diagram '{}' saved to {} (preview: {})\n\n{}",
            params.title,
            mmd.display(),
            md.display(),
            source
        )))
    }
}
