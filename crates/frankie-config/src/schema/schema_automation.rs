//! Desktop automation and research-mode settings.

use serde::{Deserialize, Serialize};

/// How macro steps are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationPolicy {
    /// Log failed steps and keep going.
    #[default]
    Optimistic,
    /// Stop the macro at the first failed step.
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationConfig {
    #[serde(default)]
    pub verification: VerificationPolicy,

    /// Multiplier applied to every scripted delay. 0 disables sleeping.
    #[serde(default = "default_delay_scale")]
    pub delay_scale: f64,

    /// Let high-risk tools run without asking.
    #[serde(default = "super::default_true")]
    pub bypass_tool_consent: bool,

    /// Tesseract language for on-screen text lookup.
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
}

fn default_delay_scale() -> f64 {
    1.0
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            verification: VerificationPolicy::default(),
            delay_scale: default_delay_scale(),
            bypass_tool_consent: true,
            ocr_language: default_ocr_language(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Site the browser agent opens when research mode starts.
    #[serde(default = "default_search_engine")]
    pub search_engine: String,
}

fn default_search_engine() -> String {
    "duckduckgo.com".to_string()
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            search_engine: default_search_engine(),
        }
    }
}
