pub const DEFAULT_MODEL: &str = "gpt-4-0125-preview";

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a market analyst writing structured research reports for business owners. \
Include tables in Markdown when relevant.";

/// Fixed parameters applied to every section request.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

impl GenerationSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
