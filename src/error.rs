//! carmatch Error Types
//!
//! The matching core itself never fails on a description. These errors
//! cover the ambient surfaces: catalog access, config and evaluation I/O.

use thiserror::Error;

/// Central error type for carmatch
#[derive(Error, Debug)]
pub enum CarMatchError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type alias for carmatch operations
pub type CarMatchResult<T> = Result<T, CarMatchError>;
