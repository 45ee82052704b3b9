//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

mod schema_model;
mod schema_automation;
mod schema_services;

pub use schema_model::*;
pub use schema_automation::*;
pub use schema_services::*;

pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub retry: RetrySettings,

    #[serde(default)]
    pub agents: AgentsConfig,

    #[serde(default)]
    pub automation: AutomationConfig,

    #[serde(default)]
    pub research: ResearchConfig,

    #[serde(default)]
    pub rss: RssConfig,

    #[serde(default)]
    pub memory: MemoryConfig,

    #[serde(default)]
    pub slack: SlackConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
