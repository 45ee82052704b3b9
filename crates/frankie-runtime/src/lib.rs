//! # F.R.A.N.K.I.E. Runtime
//!
//! The tool-calling loop every model-backed agent runs, and the retry
//! wrapper placed in front of the hosted model.

pub mod agent_loop;
pub mod llm_agent;
pub mod retry;

pub use agent_loop::{AgentLoop, AgentLoopConfig, LoopOutcome, truncate_output};
pub use llm_agent::LlmAgent;
pub use retry::{RetryConfig, RetryProvider};
