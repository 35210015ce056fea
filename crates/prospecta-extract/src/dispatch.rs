use std::sync::Arc;

use prospecta_core::models::upload::{DocumentFormat, UploadedFile};
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::ocr::OcrEngine;
use crate::pdf::extract_pdf_text;
use crate::word::extract_word_text;

/// Outcome of reading one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Text read from a recognized format. May be empty.
    Text {
        format: DocumentFormat,
        text: String,
    },
    /// The filename did not match any format we can read.
    Unsupported,
}

impl Extraction {
    /// The extracted text; empty for unsupported files.
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text { text, .. } => text,
            Extraction::Unsupported => String::new(),
        }
    }
}

/// Routes each upload to the reader for its format.
#[derive(Clone)]
pub struct TextExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl TextExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extract plain text from an upload.
    ///
    /// Corrupt content in a recognized format is an error; an unknown format
    /// is not, it yields [`Extraction::Unsupported`].
    pub fn extract(&self, file: &UploadedFile) -> Result<Extraction, ExtractError> {
        let format = file.format();

        let text = match format {
            DocumentFormat::Pdf => extract_pdf_text(&file.bytes)?,
            DocumentFormat::Word => extract_word_text(&file.bytes)?,
            DocumentFormat::Image => self.extract_image_text(&file.bytes)?,
            DocumentFormat::Unsupported => {
                warn!(filename = %file.filename, "unsupported upload format, skipping");
                return Ok(Extraction::Unsupported);
            }
        };

        info!(
            filename = %file.filename,
            ?format,
            text_len = text.len(),
            "text extraction complete"
        );

        Ok(Extraction::Text { format, text })
    }

    fn extract_image_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let image = image::load_from_memory(bytes)?;
        self.ocr.recognize(&image)
    }
}
