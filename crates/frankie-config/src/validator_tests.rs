use super::*;
use crate::schema::VerificationPolicy;

fn valid_config() -> Config {
    let mut config = Config::default();
    config.model.api_key = Some("sk-ant-test".to_string());
    config
}

#[test]
fn test_default_config_with_key_is_clean() {
    let result = ConfigValidator::validate(&valid_config());
    assert!(result.is_valid(), "{}", result.summary());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_missing_api_key_is_only_a_warning() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "model.api_key"));
}

#[test]
fn test_budget_below_minimum() {
    let mut config = valid_config();
    config.model.thinking.budget_tokens = 512;
    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.summary().contains("at least 1024"));
}

#[test]
fn test_budget_must_fit_under_max_tokens() {
    let mut config = valid_config();
    config.model.max_tokens = 2000;
    config.model.thinking.budget_tokens = 2048;
    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.message.contains("less than model.max_tokens")));
}

#[test]
fn test_budget_ignored_when_thinking_disabled() {
    let mut config = valid_config();
    config.model.thinking.thinking_type = "disabled".to_string();
    config.model.thinking.budget_tokens = 0;
    assert!(ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_zero_retry_attempts() {
    let mut config = valid_config();
    config.retry.max_attempts = 0;
    let result = ConfigValidator::validate(&config);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "retry.max_attempts");
}

#[test]
fn test_negative_delay_scale() {
    let mut config = valid_config();
    config.automation.delay_scale = -1.0;
    assert!(!ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_oversized_delay_scale() {
    let mut config = valid_config();
    config.automation.delay_scale = 1e18;
    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.summary().contains("automation.delay_scale"));

    config.automation.delay_scale = MAX_DELAY_SCALE;
    assert!(ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_zero_delay_scale_is_allowed() {
    let mut config = valid_config();
    config.automation.delay_scale = 0.0;
    config.automation.verification = VerificationPolicy::Strict;
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_consent_off_warns() {
    let mut config = valid_config();
    config.automation.bypass_tool_consent = false;
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.path == "automation.bypass_tool_consent"));
}
