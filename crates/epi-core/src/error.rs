//! Foundation error type.
//!
//! Sub-crates define their own error enums for their own failure taxonomies
//! (`epi-net` for synthesis, `epi-sim` for the engine) and keep them
//! separate from this base; `EpiError` covers only the primitives defined
//! here.

use thiserror::Error;

/// The error type for `epi-core` primitives.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `epi-core`.
pub type EpiResult<T> = Result<T, EpiError>;
