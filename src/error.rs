use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row: {0}")]
    MalformedRow(String),

    #[error("Conversion failure for field '{field}': '{value}'")]
    Conversion { field: String, value: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
