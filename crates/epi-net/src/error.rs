//! Error types for network construction and synthesis.

use epi_core::Category;
use thiserror::Error;

/// Errors raised while validating inputs or synthesizing a network.
///
/// All variants are fatal to the current construction call and are never
/// retried internally.  A zero-probability category or a friendship
/// probability of exactly 0 is a normal outcome, not an error.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("categorical distribution must sum to 1, got {got}")]
    DistributionSum { got: f64 },

    #[error("no degree target declared for category {0}")]
    MissingDegree(Category),

    #[error("no friendship probability for category pair ({0}, {1})")]
    MissingFriendship(Category, Category),

    #[error("synthesis exhausted after {attempts} attempts against a budget of {budget}")]
    AttemptsExhausted { attempts: u64, budget: u64 },

    #[error("network configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `epi-net`.
pub type NetResult<T> = Result<T, NetError>;
