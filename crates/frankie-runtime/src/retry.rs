//! Provider retry with exponential backoff.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, warn};

use frankie_config::RetrySettings;
use frankie_protocols::error::ProviderError;
use frankie_protocols::provider::{
    CompletionRequest, CompletionResponse, LLMProvider, ModelDefinition,
};

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Base delay between retries.
    pub base_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Exponential backoff multiplier.
    pub backoff_multiplier: f64,
    /// Add jitter to delays.
    pub jitter: bool,
    /// Double the delay when the service reports throttling.
    pub adaptive: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from(&RetrySettings::default())
    }
}

impl From<&RetrySettings> for RetryConfig {
    fn from(settings: &RetrySettings) -> Self {
        Self {
            max_retries: settings.max_attempts.saturating_sub(1),
            base_delay: Duration::from_millis(settings.initial_delay_ms),
            max_delay: Duration::from_millis(settings.max_delay_ms),
            backoff_multiplier: settings.backoff_multiplier,
            jitter: true,
            adaptive: settings.adaptive,
        }
    }
}

impl RetryConfig {
    /// Calculate delay for a given attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self.base_delay.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        let delay = delay.min(self.max_delay.as_millis() as f64);

        let delay_ms = if self.jitter {
            let jitter = rand_jitter(delay * 0.1);
            (delay + jitter).max(0.0) as u64
        } else {
            delay as u64
        };

        Duration::from_millis(delay_ms)
    }

    /// Delay before retrying after `error` on the given attempt.
    pub fn delay_for_error(&self, error: &ProviderError, attempt: u32) -> Duration {
        if let ProviderError::RateLimited { retry_after_seconds } = error {
            return Duration::from_secs(*retry_after_seconds).min(self.max_delay);
        }
        let delay = self.delay_for_attempt(attempt);
        if self.adaptive && error.is_throttling() {
            (delay * 2).min(self.max_delay)
        } else {
            delay
        }
    }
}

/// Simple jitter using system time.
fn rand_jitter(max: f64) -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    (nanos as f64 / u32::MAX as f64) * max * 2.0 - max
}

/// Provider wrapper with retry capability.
pub struct RetryProvider {
    inner: Arc<dyn LLMProvider>,
    config: RetryConfig,
}

impl RetryProvider {
    pub fn new(provider: Arc<dyn LLMProvider>, config: RetryConfig) -> Self {
        Self {
            inner: provider,
            config,
        }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, ProviderError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if !e.is_retryable() || attempt >= self.config.max_retries {
                        return Err(e);
                    }

                    let delay = self.config.delay_for_error(&e, attempt);
                    warn!(
                        "Provider error (attempt {}/{}): {}, retrying in {:?}",
                        attempt + 1,
                        self.config.max_retries + 1,
                        e,
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    pub fn inner(&self) -> &Arc<dyn LLMProvider> {
        &self.inner
    }
}

#[async_trait]
impl LLMProvider for RetryProvider {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn models(&self) -> &[ModelDefinition] {
        self.inner.models()
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        debug!("Completing with retry: model={}", request.model);
        self.with_retry(|| {
            let req = request.clone();
            let provider = self.inner.clone();
            async move { provider.complete(req).await }
        })
        .await
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
