// crates/estate-suggest-core/src/error.rs

//! Error type for the I/O shell around the suggestion core.
//!
//! The scoring, matching and aggregation functions are total and never
//! return errors. Only loading and saving reference data, click history and
//! configuration can fail.

use thiserror::Error;

/// Errors produced while loading or persisting data.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, SuggestError>;
