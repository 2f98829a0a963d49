use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::{oneshot, Mutex};
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use crate::error::EvalError;

/// Default outbound pacing applied to each real provider.
pub const DEFAULT_REQUESTS_PER_SECOND: f64 = 3.0;

type Job = BoxFuture<'static, ()>;

/// Paces outbound calls to a single provider.
///
/// Tasks are queued FIFO and dispatched no faster than the configured rate.
/// Spacing is measured from dispatch time rather than completion time, so a
/// slow in-flight call does not push the next dispatch beyond the interval.
/// At most one drain loop runs per limiter; scheduling while a loop is
/// active only enqueues.
///
/// Cloning is cheap and every clone feeds the same queue, which is how one
/// limiter is shared process-wide per provider.
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<LimiterState>>,
    min_interval: Duration,
}

struct LimiterState {
    queue: VecDeque<Job>,
    processing: bool,
    last_dispatch: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter allowing `requests_per_second` dispatches.
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            state: Arc::new(Mutex::new(LimiterState {
                queue: VecDeque::new(),
                processing: false,
                last_dispatch: None,
            })),
            min_interval,
        }
    }

    /// Enqueues `task` and resolves with its own outcome once the limiter
    /// has dispatched and run it.
    ///
    /// A failing task rejects only its caller; the drain loop always moves
    /// on to the next queued item.
    ///
    /// Dropping the returned future cancels the job: one still queued
    /// becomes a no-op, one already running is aborted at its next await
    /// point. A caller-side timeout therefore aborts the underlying call
    /// instead of letting it run to completion unobserved.
    pub async fn schedule<T, F, Fut>(&self, task: F) -> Result<T, EvalError>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, EvalError>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let cancel = CancellationToken::new();
        // Held across the await below; dropping this future trips the
        // token and with it the spawned job.
        let _abort_guard = cancel.clone().drop_guard();
        let job: Job = Box::pin(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                outcome = task() => {
                    let _ = tx.send(outcome);
                }
            }
        });

        let start_loop = {
            let mut state = self.state.lock().await;
            state.queue.push_back(job);
            if state.processing {
                false
            } else {
                state.processing = true;
                true
            }
        };

        if start_loop {
            let limiter = self.clone();
            tokio::spawn(async move { limiter.drain().await });
        }

        match rx.await {
            Ok(outcome) => outcome,
            // The drain loop dropped the job without running it, which only
            // happens on runtime shutdown.
            Err(_) => Err(EvalError::Cancelled),
        }
    }

    async fn drain(self) {
        loop {
            let wait = {
                let mut state = self.state.lock().await;
                if state.queue.is_empty() {
                    state.processing = false;
                    return;
                }
                match state.last_dispatch {
                    Some(last) => self.min_interval.saturating_sub(last.elapsed()),
                    None => Duration::ZERO,
                }
            };

            if !wait.is_zero() {
                sleep(wait).await;
            }

            let job = {
                let mut state = self.state.lock().await;
                state.last_dispatch = Some(Instant::now());
                state.queue.pop_front()
            };

            // Not awaited: the next dispatch is spaced from dispatch time,
            // not from this task's completion.
            if let Some(job) = job {
                tokio::spawn(job);
            }
        }
    }
}
