use std::path::Path;

/// A file received from the client. Lives for one request only.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_filename(&self.filename)
    }
}

/// Input formats the extractor knows how to read.
///
/// Anything else is [`DocumentFormat::Unsupported`], so callers can tell an
/// empty document apart from one nobody could read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Word,
    Image,
    Unsupported,
}

impl DocumentFormat {
    /// Infer the format from a filename suffix, ignoring case.
    pub fn from_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" | "doc" => DocumentFormat::Word,
            "png" | "jpg" | "jpeg" => DocumentFormat::Image,
            _ => DocumentFormat::Unsupported,
        }
    }
}
