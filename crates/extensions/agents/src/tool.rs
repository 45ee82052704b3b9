//! Exposes an [`Agent`] to a model as a tool taking one `query` string.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use frankie_protocols::agent::Agent;
use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};

#[derive(Debug, Deserialize)]
struct AgentToolParams {
    query: String,
}

pub struct AgentTool {
    definition: ToolDefinition,
    agent: Arc<dyn Agent>,
}

impl AgentTool {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        let descriptor = agent.descriptor();
        let definition = ToolDefinition::new(
            descriptor.id.clone(),
            descriptor.name.clone(),
            descriptor.description.clone(),
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The complete, self-contained request for this agent"
                }
            },
            "required": ["query"]
        }));
        Self { definition, agent }
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: AgentToolParams = parse_params(params)?;
        debug!(agent = %self.definition.id, "Delegating {} chars", params.query.len());
        match self.agent.invoke(&params.query).await {
            Ok(text) => Ok(ToolResult::success(text)),
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use frankie_protocols::agent::AgentDescriptor;
    use frankie_protocols::error::AgentError;

    struct Upper {
        descriptor: AgentDescriptor,
    }

    #[async_trait]
    impl Agent for Upper {
        fn descriptor(&self) -> &AgentDescriptor {
            &self.descriptor
        }

        async fn invoke(&self, query: &str) -> Result<String, AgentError> {
            if query == "fail" {
                return Err(AgentError::ExecutionFailed("nope".into()));
            }
            Ok(query.to_uppercase())
        }
    }

    fn tool() -> AgentTool {
        AgentTool::new(Arc::new(Upper {
            descriptor: AgentDescriptor::new("upper_agent", "Upper", "shouts"),
        }))
    }

    fn ctx() -> ToolContext {
        ToolContext::new("s", PathBuf::from("/tmp"))
    }

    #[test]
    fn test_definition_mirrors_descriptor() {
        let tool = tool();
        assert_eq!(tool.definition().id, "upper_agent");
        assert_eq!(tool.definition().description, "shouts");
        assert!(tool.definition().parameters_schema.is_some());
    }

    #[tokio::test]
    async fn test_execute() {
        let result = tool()
            .execute(serde_json::json!({"query": "hi"}), ctx())
            .await
            .unwrap();
        assert_eq!(result.content, "HI");
    }

    #[tokio::test]
    async fn test_agent_error_is_reported() {
        let result = tool()
            .execute(serde_json::json!({"query": "fail"}), ctx())
            .await
            .unwrap();
        assert!(!result.success);
        assert!(result.into_text().contains("nope"));
    }

    #[tokio::test]
    async fn test_missing_query() {
        let err = tool().execute(serde_json::json!({}), ctx()).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameters(_)));
    }
}
