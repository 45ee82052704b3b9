//! Anthropic provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use frankie_config::ModelConfig;
use frankie_protocols::error::ProviderError;
use frankie_protocols::provider::{
    CompletionRequest, CompletionResponse, LLMProvider, ModelDefinition,
};

use crate::api::{ApiErrorBody, ApiRequest, ApiResponse};
use crate::converter::{convert_messages, convert_tools};
use crate::models::get_models;
use crate::parser::parse_response;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_TIMEOUT_SECS: u64 = 900;

/// Anthropic LLM provider.
pub struct AnthropicProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
    models: Vec<ModelDefinition>,
}

impl AnthropicProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            models: get_models(),
        }
    }

    /// Build a provider from the `[model]` section.
    ///
    /// Fails when no API key is configured or the HTTP client cannot be built.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::AuthenticationFailed(
                    "no API key configured; set ANTHROPIC_API_KEY".to_string(),
                )
            })?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.read_timeout_secs))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: config.read_timeout_secs,
            models: get_models(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn build_request(&self, request: &CompletionRequest) -> ApiRequest {
        let thinking = request.thinking.filter(|t| t.is_enabled());
        ApiRequest {
            model: request.model.clone(),
            messages: convert_messages(&request.messages),
            system: request.system.clone(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            // The API rejects a custom temperature while thinking is on.
            temperature: if thinking.is_some() { None } else { request.temperature },
            tools: convert_tools(request),
            thinking,
        }
    }

    async fn send_request(
        &self,
        api_request: &ApiRequest,
        betas: &[String],
    ) -> Result<reqwest::Response, ProviderError> {
        let mut builder = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json");
        if !betas.is_empty() {
            builder = builder.header("anthropic-beta", betas.join(","));
        }

        let response = builder.json(api_request).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout_secs)
            } else {
                ProviderError::Network(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => {
                    debug!(error_type = %parsed.error.error_type, "Anthropic API error");
                    parsed.error.message
                }
                Err(_) => body,
            };
            warn!(status, "Anthropic request failed: {}", message);
            return Err(ProviderError::from_api_response(status, message));
        }

        Ok(response)
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    fn id(&self) -> &str {
        "anthropic"
    }

    fn models(&self) -> &[ModelDefinition] {
        &self.models
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let api_request = self.build_request(&request);
        debug!(
            model = %api_request.model,
            messages = api_request.messages.len(),
            tools = api_request.tools.len(),
            "Sending completion request"
        );
        let response = self.send_request(&api_request, &request.betas).await?;
        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        Ok(parse_response(api_response))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
