//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The backing store is unavailable; opaque to this layer.
    /// Ingestion callers may retry; no retry happens here.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Parse error during record parsing.
    #[error("parse error: {0}")]
    Parse(#[from] crate::typed::ParseError),
    /// Other error.
    #[error("{0}")]
    Other(String),
}
