use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured for the generation service")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response contained no message content")]
    EmptyResponse,
}
