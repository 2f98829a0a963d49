//! Anthropic messages API client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::completion::CompletionProvider;
use crate::error::EvalError;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_MAX_TOKENS: u32 = 2048;
const DEFAULT_TEMPERATURE: f32 = 0.3;
const API_VERSION: &str = "2023-06-01";
const CLIENT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Anthropic client.
#[derive(Debug)]
struct AnthropicConfig {
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    base_url: String,
}

/// Client for the Anthropic messages endpoint.
///
/// Configuration is shared via `Arc`, making cloning cheap.
#[derive(Debug, Clone)]
pub struct Anthropic {
    config: Arc<AnthropicConfig>,
    client: Client,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl Anthropic {
    /// Creates a client from an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, EvalError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, EvalError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| EvalError::Config("ANTHROPIC_API_KEY is not set".to_string()))?;
        Self::new(api_key)
    }

    /// Creates a client against a custom endpoint, used by HTTP tests.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, EvalError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(EvalError::Config("Anthropic API key is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECS))
            .build()
            .map_err(|e| EvalError::Http(e.to_string()))?;
        Ok(Self {
            config: Arc::new(AnthropicConfig {
                api_key,
                model: DEFAULT_MODEL.to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
                base_url: base_url.into(),
            }),
            client,
        })
    }
}

#[async_trait]
impl CompletionProvider for Anthropic {
    async fn complete(&self, prompt: &str) -> Result<String, EvalError> {
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![WireMessage {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .client
            .post(format!("{}/messages", self.config.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        log::debug!("Anthropic HTTP status: {}", resp.status());

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(EvalError::Upstream {
                message,
                status: Some(status),
            });
        }

        let parsed: MessagesResponse = resp.json().await?;
        match parsed.content.first() {
            Some(block) if block.kind == "text" && !block.text.is_empty() => Ok(block.text.clone()),
            _ => Err(EvalError::Upstream {
                message: "no usable text content in completion".to_string(),
                status: None,
            }),
        }
    }
}
