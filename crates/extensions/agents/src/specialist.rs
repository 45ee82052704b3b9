//! Specialist agents: a model-backed agent behind a preamble and a reply envelope.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use frankie_protocols::agent::{Agent, AgentDescriptor};
use frankie_protocols::error::AgentError;

use crate::kind::AgentKind;

/// By default never fails: errors and empty replies come back as readable
/// text so the orchestrator model can react to them. A
/// [`propagating`](SpecialistAgent::propagating) specialist returns the
/// inner error instead, for callers that fall back on failure.
pub struct SpecialistAgent {
    kind: AgentKind,
    descriptor: AgentDescriptor,
    inner: Arc<dyn Agent>,
    propagate: bool,
}

impl SpecialistAgent {
    pub fn new(kind: AgentKind, inner: Arc<dyn Agent>) -> Self {
        Self {
            kind,
            descriptor: kind.descriptor(),
            inner,
            propagate: false,
        }
    }

    /// Return invocation errors as `Err` instead of error text.
    pub fn propagating(mut self) -> Self {
        self.propagate = true;
        self
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }
}

#[async_trait]
impl Agent for SpecialistAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, query: &str) -> Result<String, AgentError> {
        info!(agent = %self.kind.id(), "Routing query to {}", self.kind);
        let formatted = self.kind.preamble(query);

        match self.inner.invoke(&formatted).await {
            Ok(text) if text.trim().is_empty() => {
                warn!(agent = %self.kind.id(), "Empty reply");
                Ok(self.kind.empty_reply())
            }
            Ok(text) => Ok(self.kind.envelope(&text)),
            Err(e) => {
                error!(agent = %self.kind.id(), error = %e, "Agent failed");
                if self.propagate {
                    return Err(e);
                }
                Ok(self.kind.failure(&e.to_string()))
            }
        }
    }
}
