//! Process-wide provider lookup over the closed provider set.

use std::sync::Arc;

use async_trait::async_trait;

use crate::completion::{CompletionProvider, ProviderKind};
use crate::error::EvalError;
use crate::limiter::{RateLimiter, DEFAULT_REQUESTS_PER_SECOND};

use super::{Anthropic, OpenAi, TestProvider};

/// A provider composed with its rate limiter.
///
/// Pacing stays a separate layer from retry: the dispatcher wraps this, and
/// this wraps the raw client.
pub struct RateLimited {
    inner: Arc<dyn CompletionProvider>,
    limiter: RateLimiter,
}

impl RateLimited {
    pub fn new(inner: Arc<dyn CompletionProvider>, limiter: RateLimiter) -> Self {
        Self { inner, limiter }
    }
}

#[async_trait]
impl CompletionProvider for RateLimited {
    async fn complete(&self, prompt: &str) -> Result<String, EvalError> {
        let inner = self.inner.clone();
        let prompt = prompt.to_string();
        self.limiter
            .schedule(move || async move { inner.complete(&prompt).await })
            .await
    }
}

/// One slot per provider, shared across every request in the process.
///
/// Providers whose key is absent stay unregistered; selecting one surfaces a
/// configuration error instead of being retried.
pub struct ProviderRegistry {
    anthropic: Option<Arc<dyn CompletionProvider>>,
    openai: Option<Arc<dyn CompletionProvider>>,
    test: Arc<dyn CompletionProvider>,
}

impl ProviderRegistry {
    /// A registry with only the test stub registered.
    pub fn empty() -> Self {
        Self {
            anthropic: None,
            openai: None,
            test: Arc::new(TestProvider),
        }
    }

    /// Builds the registry from environment keys, giving each real provider
    /// its own rate limiter at the default pacing.
    pub fn from_env() -> Self {
        Self::from_env_with_rate(DEFAULT_REQUESTS_PER_SECOND)
    }

    /// Same as [`from_env`](Self::from_env) with explicit pacing.
    pub fn from_env_with_rate(requests_per_second: f64) -> Self {
        let mut registry = Self::empty();
        match Anthropic::from_env() {
            Ok(client) => {
                registry.register_limited(
                    ProviderKind::Anthropic,
                    Arc::new(client),
                    requests_per_second,
                );
            }
            Err(err) => log::warn!("anthropic backend unavailable: {err}"),
        }
        match OpenAi::from_env() {
            Ok(client) => {
                registry.register_limited(
                    ProviderKind::OpenAi,
                    Arc::new(client),
                    requests_per_second,
                );
            }
            Err(err) => log::warn!("openai backend unavailable: {err}"),
        }
        registry
    }

    /// Registers a provider as-is. Used by tests to inject stubs.
    pub fn register(&mut self, kind: ProviderKind, provider: Arc<dyn CompletionProvider>) {
        match kind {
            ProviderKind::Anthropic => self.anthropic = Some(provider),
            ProviderKind::OpenAi => self.openai = Some(provider),
            ProviderKind::Test => self.test = provider,
        }
    }

    /// Registers a provider behind its own rate limiter.
    pub fn register_limited(
        &mut self,
        kind: ProviderKind,
        provider: Arc<dyn CompletionProvider>,
        requests_per_second: f64,
    ) {
        let limiter = RateLimiter::new(requests_per_second);
        self.register(kind, Arc::new(RateLimited::new(provider, limiter)));
    }

    /// Looks up the provider for `kind`.
    pub fn get(&self, kind: ProviderKind) -> Result<Arc<dyn CompletionProvider>, EvalError> {
        match kind {
            ProviderKind::Anthropic => self.anthropic.clone().ok_or_else(|| {
                EvalError::Config("anthropic provider is not configured".to_string())
            }),
            ProviderKind::OpenAi => self
                .openai
                .clone()
                .ok_or_else(|| EvalError::Config("openai provider is not configured".to_string())),
            ProviderKind::Test => Ok(self.test.clone()),
        }
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_providers_surface_a_config_error() {
        let registry = ProviderRegistry::empty();
        let err = registry.get(ProviderKind::Anthropic).err();
        assert!(matches!(err, Some(EvalError::Config(_))));
    }

    #[test]
    fn the_test_stub_is_always_available() {
        let registry = ProviderRegistry::empty();
        assert!(registry.get(ProviderKind::Test).is_ok());
    }

    #[tokio::test]
    async fn rate_limited_wrapper_passes_results_through() {
        let limiter = RateLimiter::new(100.0);
        let wrapped = RateLimited::new(Arc::new(TestProvider), limiter);
        let text = wrapped
            .complete("respond using <messaging_alignment> blocks")
            .await
            .unwrap();
        assert!(text.contains("Agile Marketing"));
    }
}
