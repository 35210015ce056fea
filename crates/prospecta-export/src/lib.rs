//! prospecta-export
//!
//! Turns generated section text into document content: Markdown cleanup,
//! pipe-table detection, and DOCX rendering of an assembled report.

pub mod docx;
pub mod error;
pub mod logo;
pub mod markdown;
pub mod styles;
pub mod table;
