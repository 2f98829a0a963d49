/// Configuration for timeout, retry, and failover behavior.
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Maximum attempts against each provider, including the first one
    pub max_retries: usize,
    /// Per-attempt timeout in milliseconds; an expired timer cancels the
    /// in-flight call
    pub timeout_ms: u64,
    /// Initial backoff delay in milliseconds
    pub backoff_base_ms: u64,
    /// Maximum backoff delay in milliseconds
    pub max_backoff_ms: u64,
    /// Whether to try the designated fallback provider once the primary is
    /// exhausted
    pub enable_failover: bool,
}

const DEFAULT_MAX_RETRIES: usize = 3;
const DEFAULT_TIMEOUT_MS: u64 = 55_000;
const DEFAULT_BACKOFF_BASE_MS: u64 = 200;
const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;

impl DispatchConfig {
    /// Creates a default configuration with sane values.
    pub fn defaults() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
            enable_failover: true,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
