//! Agent registry: the specialist agents, addressable by ID or alias.

use std::sync::Arc;

use frankie_protocols::agent::Agent;

use super::base::{BaseRegistry, Registerable};
use crate::error::RegistryError;

impl Registerable for dyn Agent {
    fn registry_id(&self) -> &str {
        self.id()
    }
}

/// Registry for specialist agents.
pub struct AgentRegistry {
    inner: BaseRegistry<dyn Agent>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    pub fn register(&self, agent: Arc<dyn Agent>) -> Result<(), RegistryError> {
        tracing::debug!(agent = %agent.id(), "Registering agent");
        self.inner.register(agent)
    }

    /// Look an agent up by exact ID first, then by alias.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Agent>> {
        if let Some(agent) = self.inner.get(name) {
            return Some(agent);
        }
        self.inner
            .ordered()
            .into_iter()
            .find(|agent| agent.descriptor().answers_to(name))
    }

    /// Agents in registration order.
    pub fn list(&self) -> Vec<Arc<dyn Agent>> {
        self.inner.ordered()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
