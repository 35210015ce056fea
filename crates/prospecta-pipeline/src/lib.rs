//! prospecta-pipeline
//!
//! Report assembly: one generation request per outline section, each turned
//! into a table or a paragraph, then rendered to DOCX.

pub mod assemble;
pub mod error;

pub use assemble::ReportAssembler;
