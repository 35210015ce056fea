//! Per-section prompt construction and generation.

use tracing::info;

use crate::chat::{ChatMessage, CompletionRequest, TextGenerator};
use crate::error::LlmError;
use crate::settings::GenerationSettings;

/// `"{instruction}\n\nContext:\n{context}"`.
pub fn build_prompt(instruction: &str, context: &str) -> String {
    format!("{instruction}\n\nContext:\n{context}")
}

/// The request sent for one section.
pub fn section_request(
    settings: &GenerationSettings,
    instruction: &str,
    context: &str,
) -> CompletionRequest {
    CompletionRequest {
        model: settings.model.clone(),
        system_prompt: settings.system_prompt.clone(),
        messages: vec![ChatMessage::user(build_prompt(instruction, context))],
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    }
}

/// Generate the raw text of one report section.
///
/// Errors are returned as-is; deciding what a failed section looks like is
/// left to the caller.
pub async fn generate_section(
    generator: &dyn TextGenerator,
    settings: &GenerationSettings,
    instruction: &str,
    context: &str,
) -> Result<String, LlmError> {
    let request = section_request(settings, instruction, context);

    info!(
        model = %settings.model,
        prompt_len = request.user_prompt().map_or(0, str::len),
        "generating section"
    );

    generator.complete(&request).await
}
