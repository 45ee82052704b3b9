//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::Config;

/// Environment variables that override file settings.
pub mod env_keys {
    pub const THINKING_TYPE: &str = "FRANKIE_THINKING_TYPE";
    pub const BUDGET_TOKENS: &str = "FRANKIE_BUDGET_TOKENS";
    pub const RSS_STORAGE_PATH: &str = "FRANKIE_RSS_STORAGE_PATH";
    pub const BYPASS_TOOL_CONSENT: &str = "BYPASS_TOOL_CONSENT";
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    pub const SLACK_BOT_TOKEN: &str = "SLACK_BOT_TOKEN";
}

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, `~/.frankie/config.toml` is
    /// used when present, otherwise built-in defaults. Environment overrides
    /// are applied last in every case.
    pub fn resolve(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => {
                    tracing::debug!(path = %path.display(), "Loading config");
                    Self::load(&path)?
                }
                _ => Config::default(),
            },
        };
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// `~/.frankie/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".frankie").join("config.toml"))
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_keys::THINKING_TYPE) {
            let value = value.trim().to_lowercase();
            if value != "enabled" && value != "disabled" {
                return Err(ConfigError::invalid_value(
                    env_keys::THINKING_TYPE,
                    format!("expected 'enabled' or 'disabled', got '{value}'"),
                ));
            }
            config.model.thinking.thinking_type = value;
        }

        if let Some(value) = lookup(env_keys::BUDGET_TOKENS) {
            config.model.thinking.budget_tokens = value.trim().parse().map_err(|_| {
                ConfigError::invalid_value(env_keys::BUDGET_TOKENS, format!("'{value}' is not a number"))
            })?;
        }

        if let Some(value) = lookup(env_keys::RSS_STORAGE_PATH) {
            config.rss.storage_path = value;
        }

        if let Some(value) = lookup(env_keys::BYPASS_TOOL_CONSENT) {
            config.automation.bypass_tool_consent = parse_flag(&value).ok_or_else(|| {
                ConfigError::invalid_value(env_keys::BYPASS_TOOL_CONSENT, format!("'{value}' is not a boolean"))
            })?;
        }

        if let Some(value) = lookup(env_keys::ANTHROPIC_API_KEY) {
            config.model.api_key = Some(value);
        }

        if let Some(value) = lookup(env_keys::SLACK_BOT_TOKEN) {
            config.slack.token = Some(value);
        }

        Ok(())
    }

    /// Expand `${VAR}` and `${VAR:-default}` references.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut result = String::with_capacity(content.len());
        let mut last = 0;
        for cap in re.captures_iter(content) {
            let whole = cap.get(0).ok_or_else(|| ConfigError::Invalid("empty match".to_string()))?;
            let var_name = &cap[1];
            let value = match (std::env::var(var_name), cap.get(2)) {
                (Ok(value), _) => value,
                (Err(_), Some(default)) => default.as_str().to_string(),
                (Err(_), None) => return Err(ConfigError::EnvVarNotSet(var_name.to_string())),
            };
            result.push_str(&content[last..whole.start()]);
            result.push_str(&value);
            last = whole.end();
        }
        result.push_str(&content[last..]);
        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.frankie`).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
