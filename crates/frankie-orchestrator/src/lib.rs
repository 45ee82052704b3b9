//! Request routing for F.R.A.N.K.I.E.
//!
//! A line of user input is matched against built-in commands and desktop
//! shortcuts first; shortcuts run scripted macros locally, `research mode`
//! starts a two-turn research workflow, and everything else goes to the
//! orchestrator agent unchanged.

pub mod command;
pub mod dispatch;
pub mod error;
pub mod macros;
pub mod research;
pub mod session;
pub mod shortcuts;
pub mod turn;

#[cfg(test)]
pub(crate) mod testing;

pub use command::Command;
pub use dispatch::Dispatch;
pub use error::{MacroError, OrchestratorError};
pub use macros::{MacroExecutor, MacroReport, StepVerifier};
pub use research::{DOCUMENT_QUESTION, Prompter, ResearchState, ResearchWorkflow};
pub use session::Session;
pub use shortcuts::{EXPLICIT_ROUTING, MacroId, match_shortcut};
pub use turn::{Notice, Reply, Turn};
