use crate::document::DocumentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharterError {
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedResponseShape(String),

    #[error("Sentinel line not found: {0:?}")]
    MissingSentinel(String),

    #[error("No candidate clauses outside document {document_id}")]
    EmptyCandidateSet { document_id: DocumentId },

    #[error("No catalog metadata for document {0}")]
    MissingMetadata(DocumentId),

    #[error("Row {index} out of range for table with {rows} rows")]
    QueryOutOfRange { index: usize, rows: usize },

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CharterError>;
