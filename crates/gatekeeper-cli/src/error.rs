use gatekeeper_journal::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing parameters (expected {expected}, got {got})")]
    MissingParameters { expected: usize, got: usize },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("history store failure: {0}")]
    Store(#[from] StoreError),
    #[error("csv export failed: {0}")]
    Export(#[from] csv::Error),
}
