//! Chat-completion vocabulary shared by every generation backend.
//!
//! A backend receives one [`CompletionRequest`] (system prompt, user
//! messages, sampling parameters) and returns the model's reply text.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::LlmError;

// ── Types ────────────────────────────────────────────────────────────────────

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
}

/// Everything a backend needs to produce one reply.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// The last user message, if any.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
    }
}

// ── Backend seam ─────────────────────────────────────────────────────────────

/// A text-generation service.
///
/// Implementations issue exactly one request per call and do not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
