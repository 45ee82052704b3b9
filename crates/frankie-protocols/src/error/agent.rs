//! Agent errors.

use thiserror::Error;

use super::{ProviderError, ToolError};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Agent not found: {0}")]
    NotFound(String),

    #[error("Agent execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Max turns exceeded: {0}")]
    MaxTurnsExceeded(u32),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),
}

impl AgentError {
    /// Short name of the variant, used as the "Error Type" line in error panels.
    pub fn kind(&self) -> &'static str {
        match self {
            AgentError::NotFound(_) => "NotFound",
            AgentError::ExecutionFailed(_) => "ExecutionFailed",
            AgentError::MaxTurnsExceeded(_) => "MaxTurnsExceeded",
            AgentError::Timeout(_) => "Timeout",
            AgentError::Provider(_) => "ProviderError",
            AgentError::Tool(_) => "ToolError",
        }
    }
}
