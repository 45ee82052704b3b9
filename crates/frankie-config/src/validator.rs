//! Configuration validation.

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path: path.to_string(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.to_string(),
            message: message.into(),
        });
    }

    /// All errors joined into one line, for the startup failure message.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

/// Minimum thinking budget accepted by the API.
const MIN_THINKING_BUDGET: u32 = 1024;
/// Upper bound for `automation.delay_scale`.
const MAX_DELAY_SCALE: f64 = 20.0;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::validate_model(config, &mut result);
        Self::validate_retry(config, &mut result);
        Self::validate_automation(config, &mut result);
        Self::validate_services(config, &mut result);
        result
    }

    fn validate_model(config: &Config, result: &mut ValidationResult) {
        let model = &config.model;
        if model.id.trim().is_empty() {
            result.add_error("model.id", "must not be empty");
        }
        if model.max_tokens == 0 {
            result.add_error("model.max_tokens", "must be greater than 0");
        }
        if model.thinking.is_enabled() {
            if model.thinking.budget_tokens < MIN_THINKING_BUDGET {
                result.add_error(
                    "model.thinking.budget_tokens",
                    format!("must be at least {MIN_THINKING_BUDGET} when thinking is enabled"),
                );
            }
            if model.thinking.budget_tokens >= model.max_tokens {
                result.add_error(
                    "model.thinking.budget_tokens",
                    "must be less than model.max_tokens",
                );
            }
        }
        if model.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            result.add_warning(
                "model.api_key",
                "no API key configured; set ANTHROPIC_API_KEY before sending requests",
            );
        }
    }

    fn validate_retry(config: &Config, result: &mut ValidationResult) {
        let retry = &config.retry;
        if retry.max_attempts == 0 {
            result.add_error("retry.max_attempts", "must be at least 1");
        }
        if retry.backoff_multiplier < 1.0 {
            result.add_error("retry.backoff_multiplier", "must be at least 1.0");
        }
        if retry.initial_delay_ms > retry.max_delay_ms {
            result.add_warning(
                "retry.initial_delay_ms",
                "is larger than retry.max_delay_ms and will be capped",
            );
        }
    }

    fn validate_automation(config: &Config, result: &mut ValidationResult) {
        let scale = config.automation.delay_scale;
        if !scale.is_finite() || scale < 0.0 {
            result.add_error("automation.delay_scale", "must be a non-negative number");
        } else if scale > MAX_DELAY_SCALE {
            result.add_error(
                "automation.delay_scale",
                format!("must be at most {MAX_DELAY_SCALE}"),
            );
        } else if scale > 0.0 && scale < 0.5 {
            result.add_warning(
                "automation.delay_scale",
                "short delays may outrun UI animations",
            );
        }
        if !config.automation.bypass_tool_consent {
            result.add_warning(
                "automation.bypass_tool_consent",
                "high-risk tools (shell, input control, file writes) will be refused",
            );
        }
    }

    fn validate_services(config: &Config, result: &mut ValidationResult) {
        if config.rss.storage_path.trim().is_empty() {
            result.add_error("rss.storage_path", "must not be empty");
        }
        if config.memory.path.trim().is_empty() {
            result.add_error("memory.path", "must not be empty");
        }
        if config.research.search_engine.trim().is_empty() {
            result.add_error("research.search_engine", "must not be empty");
        }
        if config.agents.max_turns == 0 {
            result.add_error("agents.max_turns", "must be at least 1");
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
