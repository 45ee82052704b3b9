//! Assembles the specialists and the orchestrator from one provider and a
//! shared toolbox of concrete tools.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use frankie_core::{AgentRegistry, RegistryError, ToolRegistry};
use frankie_protocols::agent::{Agent, AgentDescriptor};
use frankie_protocols::provider::LLMProvider;
use frankie_protocols::tool::Tool;
use frankie_runtime::{AgentLoop, AgentLoopConfig, LlmAgent};

use crate::kind::AgentKind;
use crate::prompts;
use crate::specialist::SpecialistAgent;
use crate::tool::AgentTool;

pub const ORCHESTRATOR_ID: &str = "orchestrator_agent";

/// Tools the orchestrator calls itself, besides the agents.
pub const ORCHESTRATOR_TOOLS: [&str; 4] = ["retrieve", "slack", "current_time", "rss"];

/// Copy the tools named in `ids` out of `toolbox`. Missing tools are skipped.
pub fn select_tools(toolbox: &ToolRegistry, ids: &[&str]) -> Result<ToolRegistry, RegistryError> {
    let selected = ToolRegistry::new();
    for id in ids {
        match toolbox.get(id) {
            Some(tool) => selected.register(tool)?,
            None => warn!("Tool '{}' is not available; skipping", id),
        }
    }
    Ok(selected)
}

/// Every specialist plus the orchestrator that routes between them.
pub struct AgentSet {
    pub specialists: AgentRegistry,
    pub orchestrator: Arc<LlmAgent>,
    direct: HashMap<AgentKind, Arc<dyn Agent>>,
}

impl AgentSet {
    /// The specialist for `kind` with errors propagated as `Err`. Shares the
    /// model loop of the registered specialist.
    pub fn direct(&self, kind: AgentKind) -> Option<Arc<dyn Agent>> {
        self.direct.get(&kind).cloned()
    }
}

pub struct AgentSetBuilder {
    provider: Arc<dyn LLMProvider>,
    config: AgentLoopConfig,
    toolbox: Arc<ToolRegistry>,
}

impl AgentSetBuilder {
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        config: AgentLoopConfig,
        toolbox: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            provider,
            config,
            toolbox,
        }
    }

    /// The bare model-backed agent for `kind`, with its own toolset.
    fn model_agent(&self, kind: AgentKind) -> Result<Arc<dyn Agent>, RegistryError> {
        let tools = select_tools(&self.toolbox, kind.tool_ids())?;
        let agent_loop = AgentLoop::new(
            self.provider.clone(),
            Arc::new(tools),
            kind.system_prompt(),
            self.config.clone(),
        );
        Ok(Arc::new(LlmAgent::new(kind.descriptor(), agent_loop)))
    }

    pub fn specialist(&self, kind: AgentKind) -> Result<SpecialistAgent, RegistryError> {
        Ok(SpecialistAgent::new(kind, self.model_agent(kind)?))
    }

    pub fn build(&self) -> Result<AgentSet, RegistryError> {
        let specialists = AgentRegistry::new();
        let orchestrator_tools = ToolRegistry::new();
        let mut direct = HashMap::new();

        for kind in AgentKind::ALL {
            let model = self.model_agent(kind)?;
            let agent: Arc<dyn Agent> = Arc::new(SpecialistAgent::new(kind, model.clone()));
            orchestrator_tools.register(Arc::new(AgentTool::new(agent.clone())) as Arc<dyn Tool>)?;
            specialists.register(agent)?;
            direct.insert(
                kind,
                Arc::new(SpecialistAgent::new(kind, model).propagating()) as Arc<dyn Agent>,
            );
        }
        for id in ORCHESTRATOR_TOOLS {
            match self.toolbox.get(id) {
                Some(tool) => orchestrator_tools.register(tool)?,
                None => warn!("Tool '{}' is not available to the orchestrator", id),
            }
        }
        info!(
            "Built {} specialists; orchestrator has {} tools",
            specialists.len(),
            orchestrator_tools.len()
        );

        let agent_loop = AgentLoop::new(
            self.provider.clone(),
            Arc::new(orchestrator_tools),
            prompts::ORCHESTRATOR,
            self.config.clone(),
        );
        let descriptor = AgentDescriptor::new(
            ORCHESTRATOR_ID,
            "Orchestrator",
            "Routes requests to the specialist agents",
        );

        Ok(AgentSet {
            specialists,
            orchestrator: Arc::new(LlmAgent::new(descriptor, agent_loop)),
            direct,
        })
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
