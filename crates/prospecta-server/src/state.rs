use std::sync::Arc;

use prospecta_export::styles::DocumentStyles;
use prospecta_extract::{OcrEngine, TextExtractor};
use prospecta_llm::{GenerationSettings, TextGenerator};
use prospecta_pipeline::ReportAssembler;

use crate::config::AppConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub extractor: TextExtractor,
    pub assembler: ReportAssembler,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        generator: Arc<dyn TextGenerator>,
        ocr: Arc<dyn OcrEngine>,
    ) -> Self {
        let settings = GenerationSettings::default().with_model(config.openai_model.clone());
        Self {
            config: Arc::new(config),
            extractor: TextExtractor::new(ocr),
            assembler: ReportAssembler::new(generator, settings, DocumentStyles::default()),
        }
    }
}
