//! # F.R.A.N.K.I.E. Protocols
//!
//! Interface definitions shared by every crate in the workspace.
//! Contains traits and plain data types only.
//!
//! ## Core Traits
//!
//! - [`Tool`] - a callable unit exposed to a hosted model
//! - [`LLMProvider`] - a hosted model endpoint
//! - [`Agent`] - anything that answers `invoke(query) -> text`
//! - [`Automation`] - GUI automation primitives used by macros
//! - [`MemoryBackend`] - knowledge base storage

pub mod error;
pub mod tool;
pub mod provider;
pub mod agent;
pub mod automation;
pub mod memory;
pub mod types;

pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use provider::{CompletionRequest, CompletionResponse, LLMProvider, ThinkingConfig};
pub use agent::{Agent, AgentDescriptor};
pub use automation::{Automation, MouseButton, ScreenPoint};
pub use memory::{MemoryBackend, MemoryEntry, MemoryQuery, MemorySearchResult};
pub use error::{AgentError, AutomationError, MemoryError, ProviderError, ToolError};
pub use types::*;
