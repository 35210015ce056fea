//! Optical character recognition for image uploads.
//!
//! The extractor talks to OCR through [`OcrEngine`] so the engine can be
//! swapped (or stubbed in tests). [`TesseractOcr`] shells out to the
//! `tesseract` executable, which must be on `PATH` or configured explicitly.

use std::path::PathBuf;
use std::process::Command;

use image::{DynamicImage, ImageFormat};
use tracing::{debug, info};

use crate::error::ExtractError;

/// Turns a decoded image into text in reading order.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DynamicImage) -> Result<String, ExtractError>;
}

/// OCR backed by the Tesseract command-line tool.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: PathBuf,
}

impl TesseractOcr {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &DynamicImage) -> Result<String, ExtractError> {
        // Tesseract reads from a path, so the decoded image is written back
        // out as PNG regardless of the upload's original encoding.
        let mut input = tempfile::Builder::new()
            .prefix("prospecta-ocr-")
            .suffix(".png")
            .tempfile()?;
        image.write_to(&mut input, ImageFormat::Png)?;

        debug!(path = %input.path().display(), "running tesseract");

        let output = Command::new(&self.binary)
            .arg(input.path())
            .arg("stdout")
            .output()
            .map_err(|e| {
                ExtractError::Ocr(format!("failed to run {}: {e}", self.binary.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(text_len = text.len(), "OCR complete");
        Ok(text)
    }
}
