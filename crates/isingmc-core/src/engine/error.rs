use thiserror::Error;

use super::config::ConfigError;
use crate::core::encoding::EncodingError;
use crate::core::energy::scoring::ScoringError;
use crate::core::models::graph::ValidationError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid graph model: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Energy scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },

    #[error("Failed to encode the winning configuration: {0}")]
    Encoding(#[from] EncodingError),

    #[error(
        "Iteration budget 2^{num_spins} x {samples_per_state} does not fit in a 64-bit counter"
    )]
    BudgetOverflow {
        num_spins: usize,
        samples_per_state: u64,
    },

    #[error("Iteration budget of {budget} exceeds the configured cap of {cap}")]
    BudgetExceedsCap { budget: u64, cap: u64 },

    #[error("Computation failed: {0}")]
    Computation(String),
}
