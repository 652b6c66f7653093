//! Error types for bbdelta library.

use std::io;
use thiserror::Error;

/// Result type alias for bbdelta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting documents.
///
/// Markup never produces an error: malformed BBCode degrades to literal
/// text. Errors only come from I/O, JSON (de)serialization, and documents
/// that violate the model contract when handed to the encoder.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or parsing Delta JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// The document cannot be expressed as markup (e.g. an embed without a URL).
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
