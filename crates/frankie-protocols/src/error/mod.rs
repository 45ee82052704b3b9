//! Error types for the protocol layer.

mod tool;
mod provider;
mod agent;
mod automation;
mod memory;

pub use tool::*;
pub use provider::*;
pub use agent::*;
pub use automation::*;
pub use memory::*;
