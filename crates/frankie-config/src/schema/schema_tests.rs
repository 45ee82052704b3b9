use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.model.id, "claude-sonnet-4-20250514");
    assert_eq!(config.model.read_timeout_secs, 900);
    assert!(config.model.thinking.is_enabled());
    assert_eq!(config.model.thinking.budget_tokens, 2048);
    assert_eq!(config.retry.max_attempts, 3);
    assert!(config.retry.adaptive);
    assert_eq!(config.automation.verification, VerificationPolicy::Optimistic);
    assert!(config.automation.bypass_tool_consent);
    assert_eq!(config.rss.storage_path, "rss_feeds/news");
    assert_eq!(config.research.search_engine, "duckduckgo.com");
}

#[test]
fn test_empty_toml_equals_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.model.max_tokens, ModelConfig::default().max_tokens);
    assert_eq!(config.agents.max_turns, 25);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config: Config = toml::from_str(
        r#"
        [model.thinking]
        type = "disabled"

        [automation]
        verification = "strict"
        "#,
    )
    .unwrap();
    assert!(!config.model.thinking.is_enabled());
    assert_eq!(config.model.thinking.budget_tokens, 2048);
    assert_eq!(config.automation.verification, VerificationPolicy::Strict);
    assert_eq!(config.automation.delay_scale, 1.0);
}

#[test]
fn test_unknown_policy_is_rejected() {
    let result: Result<Config, _> = toml::from_str(
        r#"
        [automation]
        verification = "paranoid"
        "#,
    );
    assert!(result.is_err());
}
