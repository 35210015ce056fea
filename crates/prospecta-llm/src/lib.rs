//! prospecta-llm
//!
//! Chat-completion client and per-section prompt generation.

pub mod chat;
pub mod error;
pub mod openai;
pub mod section;
pub mod settings;

pub use chat::{ChatMessage, ChatRole, CompletionRequest, TextGenerator};
pub use openai::OpenAiClient;
pub use settings::GenerationSettings;
