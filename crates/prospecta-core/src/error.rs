use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("table grid needs at least a header row")]
    EmptyGrid,

    #[error("table header row has no cells")]
    EmptyHeader,
}
