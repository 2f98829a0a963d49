use serde::{Deserialize, Serialize};

use crate::completion::ProviderKind;

/// Body of `POST /evaluate`.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub text: String,
    /// Provider override; the server default applies when absent.
    #[serde(default)]
    pub api: Option<ProviderKind>,
    /// Channel the text is intended for, e.g. "blog post".
    #[serde(default)]
    pub platform: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
