//! # F.R.A.N.K.I.E. Core
//!
//! Registries shared by the runtime and the CLI:
//!
//! - [`ToolRegistry`] - tools a model may call
//! - [`AgentRegistry`] - specialist agents reachable through `--agent`

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::{AgentRegistry, ToolRegistry};
