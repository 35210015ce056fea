use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("export error: {0}")]
    Export(#[from] prospecta_export::error::ExportError),
}
