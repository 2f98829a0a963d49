//! OpenAI chat completions API client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::completion::CompletionProvider;
use crate::error::EvalError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
const DEFAULT_MAX_TOKENS: u32 = 2048;
const DEFAULT_TEMPERATURE: f32 = 0.3;
const CLIENT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the OpenAI client.
#[derive(Debug)]
struct OpenAiConfig {
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    base_url: String,
}

/// Client for the OpenAI chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAi {
    config: Arc<OpenAiConfig>,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl OpenAi {
    /// Creates a client from an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, EvalError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, EvalError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| EvalError::Config("OPENAI_API_KEY is not set".to_string()))?;
        Self::new(api_key)
    }

    /// Creates a client against a custom endpoint, used by HTTP tests.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, EvalError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(EvalError::Config("OpenAI API key is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECS))
            .build()
            .map_err(|e| EvalError::Http(e.to_string()))?;
        Ok(Self {
            config: Arc::new(OpenAiConfig {
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
impl CompletionProvider for OpenAi {
    async fn complete(&self, prompt: &str) -> Result<String, EvalError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![WireMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        log::debug!("OpenAI HTTP status: {}", resp.status());

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(EvalError::Upstream {
                message,
                status: Some(status),
            });
        }

        let parsed: ChatResponse = resp.json().await?;
        match parsed.choices.first() {
            Some(choice) if !choice.message.content.is_empty() => {
                Ok(choice.message.content.clone())
            }
            _ => Err(EvalError::Upstream {
                message: "no usable message content in completion".to_string(),
                status: None,
            }),
        }
    }
}
