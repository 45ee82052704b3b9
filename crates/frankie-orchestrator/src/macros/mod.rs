//! Desktop macros: scripted step lists run against an automation backend.

mod catalog;
mod executor;
mod step;
mod verify;

pub use catalog::{
    DOCUMENT_SETUP, MacroScript, RESEARCH_LAYOUT, RESEARCH_PROMPT, document_setup,
    research_layout, script,
};
pub use executor::{MacroExecutor, MacroReport, StepFailure};
pub use step::{AutomationStep, StepAction, UiAnchor};
pub use verify::{StepVerdict, StepVerifier};
