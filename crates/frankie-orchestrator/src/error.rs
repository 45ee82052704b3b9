//! Orchestrator errors.

use thiserror::Error;

use frankie_protocols::error::{AgentError, AutomationError, ToolError};

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Step {index} ({description}) failed: {source}")]
    StepFailed {
        index: usize,
        description: String,
        #[source]
        source: AutomationError,
    },
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("{0}")]
    Dispatch(#[from] AgentError),

    #[error("Macro '{name}' failed: {source}")]
    Macro {
        name: String,
        #[source]
        source: MacroError,
    },

    #[error("Research setup failed: {0}")]
    ResearchSetup(String),

    #[error("Shell command failed: {0}")]
    Shell(#[from] ToolError),
}

impl OrchestratorError {
    /// Short name shown as the "Error Type" line of an error panel.
    pub fn kind(&self) -> &'static str {
        match self {
            OrchestratorError::Dispatch(e) => e.kind(),
            OrchestratorError::Macro { .. } => "MacroError",
            OrchestratorError::ResearchSetup(_) => "ResearchSetupError",
            OrchestratorError::Shell(_) => "ShellError",
        }
    }
}
