use super::*;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_load_empty_config() {
    let config = ConfigLoader::load_str("").unwrap();
    assert_eq!(config.model.max_tokens, 10_000);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[model]").unwrap();
    writeln!(file, "id = \"claude-opus-4-20250514\"").unwrap();

    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(config.model.id, "claude-opus-4-20250514");
}

#[test]
fn test_load_nonexistent_file() {
    let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn test_load_invalid_toml() {
    let result = ConfigLoader::load_str("invalid = [unclosed");
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_expand_env_vars() {
    // SAFETY: unique test-only variable name
    unsafe {
        std::env::set_var("FRANKIE_TEST_SLACK_CHANNEL", "#standup");
    }
    let expanded =
        ConfigLoader::expand_env_vars("channel = \"${FRANKIE_TEST_SLACK_CHANNEL}\"").unwrap();
    assert_eq!(expanded, "channel = \"#standup\"");
    unsafe {
        std::env::remove_var("FRANKIE_TEST_SLACK_CHANNEL");
    }
}

#[test]
fn test_expand_env_vars_with_default() {
    let expanded =
        ConfigLoader::expand_env_vars("path = \"${FRANKIE_TEST_UNSET_9931:-/tmp/kb}\"").unwrap();
    assert_eq!(expanded, "path = \"/tmp/kb\"");
}

#[test]
fn test_expand_env_vars_not_set() {
    let result = ConfigLoader::expand_env_vars("value = \"${FRANKIE_TEST_UNSET_12345}\"");
    assert!(matches!(result, Err(ConfigError::EnvVarNotSet(name)) if name == "FRANKIE_TEST_UNSET_12345"));
}

#[test]
fn test_expand_env_vars_no_vars() {
    let content = "value = \"no variables here\"";
    assert_eq!(ConfigLoader::expand_env_vars(content).unwrap(), content);
}

#[test]
fn test_expand_path_with_tilde() {
    let expanded = ConfigLoader::expand_path("~/notes");
    assert!(!expanded.to_string_lossy().starts_with('~'));
    assert!(expanded.ends_with("notes"));
}

#[test]
fn test_overrides_thinking_and_budget() {
    let mut config = Config::default();
    ConfigLoader::apply_overrides(
        &mut config,
        lookup_from(&[
            (env_keys::THINKING_TYPE, "Disabled"),
            (env_keys::BUDGET_TOKENS, "4096"),
        ]),
    )
    .unwrap();
    assert!(!config.model.thinking.is_enabled());
    assert_eq!(config.model.thinking.budget_tokens, 4096);
}

#[test]
fn test_overrides_paths_and_secrets() {
    let mut config = Config::default();
    ConfigLoader::apply_overrides(
        &mut config,
        lookup_from(&[
            (env_keys::RSS_STORAGE_PATH, "/var/rss"),
            (env_keys::ANTHROPIC_API_KEY, "sk-ant-test"),
            (env_keys::SLACK_BOT_TOKEN, "xoxb-test"),
            (env_keys::BYPASS_TOOL_CONSENT, "false"),
        ]),
    )
    .unwrap();
    assert_eq!(config.rss.storage_path, "/var/rss");
    assert_eq!(config.model.api_key.as_deref(), Some("sk-ant-test"));
    assert_eq!(config.slack.token.as_deref(), Some("xoxb-test"));
    assert!(!config.automation.bypass_tool_consent);
}

#[test]
fn test_override_rejects_bad_budget() {
    let mut config = Config::default();
    let err = ConfigLoader::apply_overrides(
        &mut config,
        lookup_from(&[(env_keys::BUDGET_TOKENS, "lots")]),
    )
    .unwrap_err();
    assert!(err.to_string().contains(env_keys::BUDGET_TOKENS));
}

#[test]
fn test_override_rejects_bad_thinking_type() {
    let mut config = Config::default();
    let result = ConfigLoader::apply_overrides(
        &mut config,
        lookup_from(&[(env_keys::THINKING_TYPE, "maybe")]),
    );
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_no_overrides_leaves_config_untouched() {
    let mut config = Config::default();
    ConfigLoader::apply_overrides(&mut config, |_| None).unwrap();
    assert!(config.model.api_key.is_none());
    assert!(config.automation.bypass_tool_consent);
}
