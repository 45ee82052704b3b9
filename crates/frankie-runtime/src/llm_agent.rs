//! An [`Agent`] backed by a hosted model and a toolset.

use async_trait::async_trait;
use tracing::info;

use frankie_protocols::agent::{Agent, AgentDescriptor};
use frankie_protocols::error::AgentError;

use crate::agent_loop::AgentLoop;

pub struct LlmAgent {
    descriptor: AgentDescriptor,
    agent_loop: AgentLoop,
}

impl LlmAgent {
    pub fn new(descriptor: AgentDescriptor, agent_loop: AgentLoop) -> Self {
        Self {
            descriptor,
            agent_loop,
        }
    }

    pub fn agent_loop(&self) -> &AgentLoop {
        &self.agent_loop
    }
}

#[async_trait]
impl Agent for LlmAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, query: &str) -> Result<String, AgentError> {
        info!(agent = %self.descriptor.id, "Invoking agent");
        let outcome = self.agent_loop.run(query).await?;
        Ok(outcome.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use frankie_core::ToolRegistry;
    use frankie_protocols::error::ProviderError;
    use frankie_protocols::provider::{
        CompletionRequest, CompletionResponse, LLMProvider, ModelDefinition,
    };
    use frankie_protocols::types::{Message, StopReason, Usage};

    use crate::agent_loop::AgentLoopConfig;

    struct EchoProvider;

    #[async_trait]
    impl LLMProvider for EchoProvider {
        fn id(&self) -> &str {
            "echo"
        }

        fn models(&self) -> &[ModelDefinition] {
            &[]
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, ProviderError> {
            let last = request.messages.last().map(|m| m.content.clone()).unwrap_or_default();
            Ok(CompletionResponse {
                id: "msg".to_string(),
                model: request.model,
                message: Message::assistant(format!("echo: {last}")),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            })
        }
    }

    #[tokio::test]
    async fn test_invoke_returns_final_text() {
        let agent_loop = AgentLoop::new(
            Arc::new(EchoProvider),
            Arc::new(ToolRegistry::new()),
            "",
            AgentLoopConfig::default(),
        );
        let agent = LlmAgent::new(
            AgentDescriptor::new("coding_agent", "Coding Agent", "writes code"),
            agent_loop,
        );

        assert_eq!(agent.id(), "coding_agent");
        assert_eq!(agent.invoke("fizzbuzz").await.unwrap(), "echo: fizzbuzz");
        assert!(agent.agent_loop().config().thinking.is_some());
    }
}
