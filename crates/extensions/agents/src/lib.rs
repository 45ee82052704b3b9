//! Specialist agents and the orchestrator.
//!
//! Each specialist is an [`LlmAgent`](frankie_runtime::LlmAgent) with its own
//! system prompt and toolset, wrapped in a [`SpecialistAgent`] that adds the
//! query preamble and the reply envelope. The orchestrator sees every
//! specialist as a tool through [`AgentTool`].

mod builder;
mod kind;
pub mod prompts;
mod specialist;
mod tool;

pub use builder::{AgentSet, AgentSetBuilder, ORCHESTRATOR_ID, ORCHESTRATOR_TOOLS, select_tools};
pub use kind::{AgentKind, RULE_WIDTH};
pub use specialist::SpecialistAgent;
pub use tool::AgentTool;
