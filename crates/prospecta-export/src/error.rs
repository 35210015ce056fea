use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("logo image could not be decoded: {0}")]
    Logo(#[from] image::ImageError),
}
