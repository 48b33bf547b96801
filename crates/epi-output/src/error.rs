//! Error types for epi-output.

use thiserror::Error;

/// Errors that can occur while rendering exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("rendered CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("could not recover the CSV buffer: {0}")]
    Buffer(String),
}

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;
