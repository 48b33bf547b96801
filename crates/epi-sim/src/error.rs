use epi_core::PersonId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no such person in the network: {0}")]
    UnknownPerson(PersonId),
}

pub type SimResult<T> = Result<T, SimError>;
