//! RSS, memory, Slack and logging settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RssConfig {
    /// Where fetched feeds are archived. Relative paths resolve against the working directory.
    #[serde(default = "default_rss_path")]
    pub storage_path: String,
}

fn default_rss_path() -> String {
    "rss_feeds/news".to_string()
}

impl Default for RssConfig {
    fn default() -> Self {
        Self {
            storage_path: default_rss_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Directory of the markdown knowledge base.
    #[serde(default = "default_memory_path")]
    pub path: String,
}

fn default_memory_path() -> String {
    "~/.frankie/memory".to_string()
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: default_memory_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_channel: Option<String>,

    #[serde(default = "default_slack_api")]
    pub api_base: String,
}

fn default_slack_api() -> String {
    "https://slack.com/api".to_string()
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: None,
            default_channel: None,
            api_base: default_slack_api(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default = "default_log_dir")]
    pub directory: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "~/.frankie/logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: default_log_dir(),
        }
    }
}
