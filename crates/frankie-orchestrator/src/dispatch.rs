//! Forwards unmatched input to the orchestrator agent (or one specialist).

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use frankie_protocols::agent::Agent;

use crate::error::OrchestratorError;

/// Routes free text to a single agent.
pub struct Dispatch {
    target: Arc<dyn Agent>,
}

impl Dispatch {
    /// Route everything to `target`.
    pub fn new(target: Arc<dyn Agent>) -> Self {
        Self { target }
    }

    /// The agent that receives dispatched text.
    pub fn target(&self) -> &Arc<dyn Agent> {
        &self.target
    }

    /// Send `text` verbatim and return the reply unmodified. No retry.
    pub async fn send(&self, text: &str) -> Result<String, OrchestratorError> {
        let started = Instant::now();
        info!("Dispatching to {}", self.target.id());
        match self.target.invoke(text).await {
            Ok(reply) => {
                info!(
                    "{} answered in {}ms",
                    self.target.id(),
                    started.elapsed().as_millis()
                );
                Ok(reply)
            }
            Err(e) => {
                warn!("{} failed: {}", self.target.id(), e);
                Err(e.into())
            }
        }
    }
}
