use thiserror::Error;

use crate::types::DocumentId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Search index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("Source document not found: {0}")]
    SourceDocumentNotFound(DocumentId),

    #[error("No post id given and no current document in context")]
    MissingPostId,

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Content store failed: {0}")]
    Store(String),

    #[error("Failed to load corpus file {path}: {reason}")]
    Corpus { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
