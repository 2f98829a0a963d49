use thiserror::Error;

/// Error types that can occur while dispatching evaluations to LLM providers.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Missing or invalid configuration, such as an absent API key
    #[error("Configuration error: {0}")]
    Config(String),
    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),
    /// Non-2xx, malformed, or empty completion from a provider
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        status: Option<u16>,
    },
    /// A single dispatch attempt exceeded its timer
    #[error("Timed out after {ms}ms")]
    Timeout { ms: u64 },
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    Json(String),
    /// The evaluation batch was cancelled by the caller
    #[error("Evaluation cancelled")]
    Cancelled,
    /// Retries on the primary and all fallback attempts are exhausted
    #[error(
        "Dispatch exhausted after {attempts} attempts (primary: {primary}, fallback: {fallback:?}): {last_error}"
    )]
    DispatchExhausted {
        primary: String,
        fallback: Option<String>,
        attempts: usize,
        last_error: String,
    },
}

impl EvalError {
    /// Whether the dispatcher may retry after this error.
    ///
    /// Configuration problems and cancellation are surfaced immediately;
    /// everything upstream-shaped is assumed transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            EvalError::Http(_) => true,
            EvalError::Upstream { .. } => true,
            EvalError::Timeout { .. } => true,
            EvalError::Json(_) => true,
            EvalError::Config(_) => false,
            EvalError::Cancelled => false,
            EvalError::DispatchExhausted { .. } => false,
        }
    }
}

/// Converts reqwest HTTP errors, preserving the status code when one exists.
impl From<reqwest::Error> for EvalError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => EvalError::Upstream {
                message: err.to_string(),
                status: Some(status.as_u16()),
            },
            None => EvalError::Http(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Json(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
