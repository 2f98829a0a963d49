use std::time::Duration;

use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;

use crate::backends::ProviderRegistry;
use crate::completion::ProviderKind;
use crate::error::EvalError;

use super::config::DispatchConfig;

/// Wraps provider calls with per-attempt timeout, bounded retry with
/// exponential backoff, and single-hop failover.
///
/// Rate limiting is not handled here; providers come out of the registry
/// already paced.
pub struct ResilientDispatcher {
    registry: ProviderRegistry,
    cfg: DispatchConfig,
}

impl ResilientDispatcher {
    pub fn new(registry: ProviderRegistry, cfg: DispatchConfig) -> Self {
        Self { registry, cfg }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.cfg
    }

    /// Sends `prompt` to `primary`, retrying and failing over per the
    /// configuration. Fails only once every attempt on the primary and, if
    /// enabled, the fallback provider is exhausted.
    pub async fn dispatch(
        &self,
        prompt: &str,
        primary: ProviderKind,
        cancel: &CancellationToken,
    ) -> Result<String, EvalError> {
        let primary_err = match self.run_attempts(prompt, primary, cancel).await {
            Ok(text) => return Ok(text),
            Err(err) => err,
        };

        // Fatal errors and cancellation bypass failover entirely.
        if matches!(primary_err, EvalError::Config(_) | EvalError::Cancelled) {
            return Err(primary_err);
        }

        let fallback = if self.cfg.enable_failover {
            primary.fallback()
        } else {
            None
        };
        let Some(fallback) = fallback else {
            return Err(EvalError::DispatchExhausted {
                primary: primary.to_string(),
                fallback: None,
                attempts: self.cfg.max_retries,
                last_error: primary_err.to_string(),
            });
        };

        log::warn!("provider {primary} exhausted, failing over to {fallback}: {primary_err}");

        match self.run_attempts(prompt, fallback, cancel).await {
            Ok(text) => Ok(text),
            Err(err @ (EvalError::Config(_) | EvalError::Cancelled)) => Err(err),
            Err(fallback_err) => Err(EvalError::DispatchExhausted {
                primary: primary.to_string(),
                fallback: Some(fallback.to_string()),
                attempts: self.cfg.max_retries * 2,
                last_error: fallback_err.to_string(),
            }),
        }
    }

    async fn run_attempts(
        &self,
        prompt: &str,
        kind: ProviderKind,
        cancel: &CancellationToken,
    ) -> Result<String, EvalError> {
        let provider = self.registry.get(kind)?;
        let mut last_err = None;

        for attempt in 1..=self.cfg.max_retries {
            if cancel.is_cancelled() {
                return Err(EvalError::Cancelled);
            }

            log::debug!(
                "dispatching to {kind} (attempt {attempt}/{})",
                self.cfg.max_retries
            );

            let call = provider.complete(prompt);
            let outcome = tokio::select! {
                _ = cancel.cancelled() => return Err(EvalError::Cancelled),
                res = timeout(Duration::from_millis(self.cfg.timeout_ms), call) => res,
            };

            match outcome {
                Ok(Ok(text)) => return Ok(text),
                Ok(Err(err)) => {
                    if !err.is_retryable() {
                        return Err(err);
                    }
                    log::warn!("attempt {attempt} against {kind} failed: {err}");
                    last_err = Some(err);
                }
                Err(_) => {
                    log::warn!(
                        "attempt {attempt} against {kind} timed out after {}ms",
                        self.cfg.timeout_ms
                    );
                    last_err = Some(EvalError::Timeout {
                        ms: self.cfg.timeout_ms,
                    });
                }
            }

            if attempt < self.cfg.max_retries {
                self.backoff_sleep(attempt).await;
            }
        }

        Err(last_err.unwrap_or_else(|| EvalError::Http("no attempts were made".to_string())))
    }

    async fn backoff_sleep(&self, attempt: usize) {
        let delay = self
            .cfg
            .backoff_base_ms
            .saturating_mul(1u64 << attempt.min(16))
            .min(self.cfg.max_backoff_ms);
        sleep(Duration::from_millis(delay)).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::completion::CompletionProvider;

    use super::*;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        succeed: bool,
    }

    #[async_trait]
    impl CompletionProvider for CountingProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, EvalError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok("fallback answer".to_string())
            } else {
                Err(EvalError::Upstream {
                    message: "overloaded".to_string(),
                    status: Some(529),
                })
            }
        }
    }

    struct HangingProvider;

    #[async_trait]
    impl CompletionProvider for HangingProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, EvalError> {
            sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    struct SlowProvider {
        completions: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompletionProvider for SlowProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, EvalError> {
            sleep(Duration::from_millis(200)).await;
            self.completions.fetch_add(1, Ordering::SeqCst);
            Ok("late".to_string())
        }
    }

    fn dispatcher_with(
        primary_ok: bool,
        fallback_ok: bool,
        enable_failover: bool,
    ) -> (ResilientDispatcher, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let primary_calls = Arc::new(AtomicUsize::new(0));
        let fallback_calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ProviderRegistry::empty();
        registry.register(
            ProviderKind::Anthropic,
            Arc::new(CountingProvider {
                calls: primary_calls.clone(),
                succeed: primary_ok,
            }),
        );
        registry.register(
            ProviderKind::OpenAi,
            Arc::new(CountingProvider {
                calls: fallback_calls.clone(),
                succeed: fallback_ok,
            }),
        );
        let cfg = DispatchConfig {
            max_retries: 2,
            timeout_ms: 1_000,
            backoff_base_ms: 10,
            max_backoff_ms: 100,
            enable_failover,
        };
        (
            ResilientDispatcher::new(registry, cfg),
            primary_calls,
            fallback_calls,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn failover_succeeds_after_primary_is_exhausted() {
        let (dispatcher, primary_calls, fallback_calls) = dispatcher_with(false, true, true);
        let cancel = CancellationToken::new();

        let text = dispatcher
            .dispatch("prompt", ProviderKind::Anthropic, &cancel)
            .await
            .unwrap();

        assert_eq!(text, "fallback answer");
        assert_eq!(primary_calls.load(Ordering::SeqCst), 2);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn both_providers_failing_exhausts_all_attempts() {
        let (dispatcher, primary_calls, fallback_calls) = dispatcher_with(false, false, true);
        let cancel = CancellationToken::new();

        let err = dispatcher
            .dispatch("prompt", ProviderKind::Anthropic, &cancel)
            .await
            .unwrap_err();

        assert_eq!(primary_calls.load(Ordering::SeqCst), 2);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 2);
        match err {
            EvalError::DispatchExhausted {
                primary,
                fallback,
                attempts,
                ..
            } => {
                assert_eq!(primary, "anthropic");
                assert_eq!(fallback.as_deref(), Some("openai"));
                assert_eq!(attempts, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failover_disabled_fails_after_primary_retries_only() {
        let (dispatcher, primary_calls, fallback_calls) = dispatcher_with(false, true, false);
        let cancel = CancellationToken::new();

        let err = dispatcher
            .dispatch("prompt", ProviderKind::Anthropic, &cancel)
            .await
            .unwrap_err();

        assert_eq!(primary_calls.load(Ordering::SeqCst), 2);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
        assert!(matches!(
            err,
            EvalError::DispatchExhausted { fallback: None, .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn the_test_provider_never_fails_over() {
        let registry = ProviderRegistry::empty();
        let cfg = DispatchConfig {
            max_retries: 1,
            ..DispatchConfig::defaults()
        };
        let dispatcher = ResilientDispatcher::new(registry, cfg);
        let cancel = CancellationToken::new();

        // The stub succeeds, so this exercises the plain path; fallback() on
        // Test returning None is covered in completion.rs.
        let text = dispatcher
            .dispatch(
                "respond using <messaging_alignment> blocks",
                ProviderKind::Test,
                &cancel,
            )
            .await
            .unwrap();
        assert!(text.contains("Agile Marketing"));
    }

    #[tokio::test(start_paused = true)]
    async fn missing_configuration_is_fatal_and_never_retried() {
        let registry = ProviderRegistry::empty();
        let dispatcher = ResilientDispatcher::new(registry, DispatchConfig::defaults());
        let cancel = CancellationToken::new();

        let err = dispatcher
            .dispatch("prompt", ProviderKind::Anthropic, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, EvalError::Config(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out_attempts_are_retried_then_exhausted() {
        let mut registry = ProviderRegistry::empty();
        registry.register(ProviderKind::Anthropic, Arc::new(HangingProvider));
        let cfg = DispatchConfig {
            max_retries: 2,
            timeout_ms: 50,
            backoff_base_ms: 10,
            max_backoff_ms: 100,
            enable_failover: false,
        };
        let dispatcher = ResilientDispatcher::new(registry, cfg);
        let cancel = CancellationToken::new();

        let err = dispatcher
            .dispatch("prompt", ProviderKind::Anthropic, &cancel)
            .await
            .unwrap_err();
        match err {
            EvalError::DispatchExhausted { last_error, .. } => {
                assert!(last_error.contains("Timed out"), "got: {last_error}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn a_timed_out_call_behind_the_limiter_never_completes() {
        let completions = Arc::new(AtomicUsize::new(0));
        let mut registry = ProviderRegistry::empty();
        registry.register_limited(
            ProviderKind::Anthropic,
            Arc::new(SlowProvider {
                completions: completions.clone(),
            }),
            100.0,
        );
        let cfg = DispatchConfig {
            max_retries: 1,
            timeout_ms: 50,
            backoff_base_ms: 10,
            max_backoff_ms: 100,
            enable_failover: false,
        };
        let dispatcher = ResilientDispatcher::new(registry, cfg);
        let cancel = CancellationToken::new();

        let err = dispatcher
            .dispatch("prompt", ProviderKind::Anthropic, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, EvalError::DispatchExhausted { .. }));

        // The queued call must be aborted with its caller, not left to
        // finish in the background.
        sleep(Duration::from_millis(400)).await;
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_aborts_between_attempts() {
        let (dispatcher, primary_calls, _) = dispatcher_with(false, false, true);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = dispatcher
            .dispatch("prompt", ProviderKind::Anthropic, &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, EvalError::Cancelled));
        assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
    }
}
