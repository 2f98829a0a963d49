use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// The closed set of completion backends an evaluation can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Anthropic messages API
    Anthropic,
    /// OpenAI chat completions API
    OpenAi,
    /// Deterministic offline stub
    Test,
}

impl ProviderKind {
    /// The single designated alternate tried when this provider is
    /// exhausted. The test stub never fails over.
    pub fn fallback(&self) -> Option<ProviderKind> {
        match self {
            ProviderKind::Anthropic => Some(ProviderKind::OpenAi),
            ProviderKind::OpenAi => Some(ProviderKind::Anthropic),
            ProviderKind::Test => None,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Test => "test",
        };
        write!(f, "{name}")
    }
}

/// Uniform low-level contract implemented by every backend.
///
/// One invocation is one network call: implementations never retry
/// internally, that is the dispatcher's job.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a single prompt and returns the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, EvalError>;
}
