//! Brand-guideline evaluation pipeline over interchangeable LLM completion
//! backends.
//!
//! A submission fans out into several independently-templated prompts, one
//! per evaluation kind. Each prompt travels through composable layers:
//!
//! - [`RateLimiter`] paces outbound calls per provider
//! - [`CompletionProvider`] backends make exactly one call each
//! - [`ResilientDispatcher`](dispatch::ResilientDispatcher) adds timeout,
//!   bounded retry, and single-hop failover
//! - [`parser`] turns the model's tagged free text into typed records,
//!   tolerating malformed or partial output
//! - [`EvaluationOrchestrator`](evaluation::EvaluationOrchestrator) collects
//!   partial successes and failures into one aggregate
//!
//! ```no_run
//! use brandeval::backends::ProviderRegistry;
//! use brandeval::dispatch::{DispatchConfig, ResilientDispatcher};
//! use brandeval::evaluation::{EvaluationOptions, EvaluationOrchestrator};
//! use brandeval::ProviderKind;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() {
//! let registry = ProviderRegistry::from_env();
//! let dispatcher = ResilientDispatcher::new(registry, DispatchConfig::defaults());
//! let orchestrator = EvaluationOrchestrator::new(dispatcher);
//!
//! let aggregate = orchestrator
//!     .evaluate_all(
//!         "Launch campaigns in days, not weeks.",
//!         ProviderKind::Anthropic,
//!         &EvaluationOptions::default(),
//!         &CancellationToken::new(),
//!     )
//!     .await;
//! # }
//! ```

mod completion;
mod error;
mod limiter;

pub mod backends;
pub mod dispatch;
pub mod evaluation;
pub mod parser;
pub mod prompts;

#[cfg(feature = "api")]
pub mod api;

pub use completion::{CompletionProvider, ProviderKind};
pub use error::EvalError;
pub use limiter::{RateLimiter, DEFAULT_REQUESTS_PER_SECOND};
