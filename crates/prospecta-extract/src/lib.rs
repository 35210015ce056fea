//! prospecta-extract
//!
//! Plain-text extraction from uploaded PDF, Word and image files, and the
//! request context built from them.

pub mod context;
pub mod dispatch;
pub mod error;
pub mod ocr;
pub mod pdf;
pub mod word;

pub use dispatch::{Extraction, TextExtractor};
pub use ocr::{OcrEngine, TesseractOcr};
