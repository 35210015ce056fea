use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("Word document could not be read: {0}")]
    Word(String),

    #[error("image could not be decoded: {0}")]
    Image(#[from] image::ImageError),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
