//! Agent protocol definitions.
//!
//! An agent is anything that takes a free-text query and answers with free
//! text. The hosted model behind it, its tools and its retry policy are the
//! implementor's business; callers only see `invoke(query) -> text`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Core trait for agents.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the agent descriptor.
    fn descriptor(&self) -> &AgentDescriptor;

    /// Returns the agent ID.
    fn id(&self) -> &str {
        &self.descriptor().id
    }

    /// Answer a query. The returned text is opaque to the caller.
    async fn invoke(&self, query: &str) -> Result<String, AgentError>;
}

/// Static description of an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDescriptor {
    /// Agent ID, also the tool name under which the orchestrator sees it.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// What the agent is good at.
    pub description: String,

    /// Short names accepted by `--agent`.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl AgentDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Whether `name` refers to this agent by ID or alias (case-insensitive).
    pub fn answers_to(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.id.to_lowercase() == name || self.aliases.iter().any(|a| a.to_lowercase() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parrot {
        descriptor: AgentDescriptor,
    }

    #[async_trait]
    impl Agent for Parrot {
        fn descriptor(&self) -> &AgentDescriptor {
            &self.descriptor
        }

        async fn invoke(&self, query: &str) -> Result<String, AgentError> {
            Ok(format!("squawk: {query}"))
        }
    }

    #[test]
    fn test_answers_to_id_and_alias() {
        let d = AgentDescriptor::new("use_browser_agent", "Browser Agent", "web")
            .with_aliases(&["browser", "web"]);
        assert!(d.answers_to("use_browser_agent"));
        assert!(d.answers_to("Browser"));
        assert!(d.answers_to(" web "));
        assert!(!d.answers_to("computer"));
    }

    #[tokio::test]
    async fn test_invoke_and_default_id() {
        let agent = Parrot {
            descriptor: AgentDescriptor::new("parrot", "Parrot", "repeats"),
        };
        assert_eq!(agent.id(), "parrot");
        assert_eq!(agent.invoke("hello").await.unwrap(), "squawk: hello");
    }
}
