use std::path::PathBuf;

use thiserror::Error;

use crate::difficulty::Difficulty;

/// Errors raised while loading the embedded quote bank.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote file {0} is missing")]
    Missing(String),
    #[error("quote file {0} is not valid utf-8")]
    Encoding(String),
    #[error("quote file {file} is malformed: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no quotes registered for {0}")]
    EmptyPool(Difficulty),
}

/// Errors raised by the persisted key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
