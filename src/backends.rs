#[path = "backends/anthropic.rs"]
mod anthropic;

#[path = "backends/openai.rs"]
mod openai;

#[path = "backends/testing.rs"]
pub mod testing;

#[path = "backends/registry.rs"]
mod registry;

pub use anthropic::Anthropic;
pub use openai::OpenAi;
pub use registry::{ProviderRegistry, RateLimited};
pub use testing::TestProvider;
