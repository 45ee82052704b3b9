//! Anthropic model definitions.

use frankie_protocols::provider::ModelDefinition;

/// Models this provider knows about.
pub fn get_models() -> Vec<ModelDefinition> {
    vec![
        ModelDefinition::new("claude-opus-4-20250514", "Claude Opus 4")
            .with_max_output_tokens(32_000)
            .with_thinking(),
        ModelDefinition::new("claude-sonnet-4-20250514", "Claude Sonnet 4")
            .with_max_output_tokens(64_000)
            .with_thinking(),
        ModelDefinition::new("claude-3-7-sonnet-20250219", "Claude Sonnet 3.7")
            .with_max_output_tokens(64_000)
            .with_thinking(),
        ModelDefinition::new("claude-3-5-haiku-20241022", "Claude Haiku 3.5"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_listed() {
        let models = get_models();
        assert!(models.iter().any(|m| m.id == "claude-sonnet-4-20250514"));
    }

    #[test]
    fn test_thinking_support() {
        let models = get_models();
        let sonnet = models.iter().find(|m| m.id.contains("sonnet-4")).unwrap();
        assert!(sonnet.supports_thinking);
        let haiku = models.iter().find(|m| m.id.contains("haiku")).unwrap();
        assert!(!haiku.supports_thinking);
    }

    #[test]
    fn test_all_models_have_context() {
        for model in get_models() {
            assert_eq!(model.context_length, 200_000, "{}", model.id);
            assert!(model.max_output_tokens >= 8192, "{}", model.id);
        }
    }
}
