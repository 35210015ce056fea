//! OpenAI-compatible chat completions over HTTPS.
//!
//! Speaks the `POST {base_url}/chat/completions` wire format, so any
//! service exposing that endpoint (OpenAI, Azure-style gateways, local
//! servers) can back report generation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chat::{ChatMessage, CompletionRequest, TextGenerator};
use crate::error::LlmError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<&'a ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Chat-completion client for an OpenAI-compatible endpoint.
///
/// A missing API key is not an error at construction time; every request
/// made without one fails with [`LlmError::MissingApiKey`].
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let system = ChatMessage::system(request.system_prompt.as_str());
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(&system);
        messages.extend(request.messages.iter());

        let body = ChatCompletionBody {
            model: &request.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %request.model, url = %self.completions_url(), "calling chat completions");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ResponseParse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        info!(model = %request.model, text_len = text.len(), "chat completion received");

        Ok(text)
    }
}
