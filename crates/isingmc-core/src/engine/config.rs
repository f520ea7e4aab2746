use thiserror::Error;

pub const DEFAULT_SAMPLES_PER_STATE: u64 = 100;
pub const DEFAULT_CHUNK_SIZE: u64 = 65_536;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Multiplier applied to `2^N` to obtain the iteration budget.
    pub samples_per_state: u64,
    /// Master seed. `None` draws a fresh seed from the operating system.
    pub seed: Option<u64>,
    /// Refuse to start a run whose budget exceeds this many iterations.
    pub max_iterations: Option<u64>,
    /// Iterations per independently seeded chunk in a partitioned run.
    pub chunk_size: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            samples_per_state: DEFAULT_SAMPLES_PER_STATE,
            seed: None,
            max_iterations: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    samples_per_state: Option<u64>,
    seed: Option<u64>,
    max_iterations: Option<u64>,
    chunk_size: Option<u64>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples_per_state(mut self, samples: u64) -> Self {
        self.samples_per_state = Some(samples);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn max_iterations(mut self, cap: Option<u64>) -> Self {
        self.max_iterations = cap;
        self
    }
    pub fn chunk_size(mut self, size: u64) -> Self {
        self.chunk_size = Some(size);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let samples_per_state = self.samples_per_state.unwrap_or(DEFAULT_SAMPLES_PER_STATE);
        if samples_per_state == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "samples_per_state",
                reason: "must be at least 1",
            });
        }
        let chunk_size = self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE);
        if chunk_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "chunk_size",
                reason: "must be at least 1",
            });
        }
        if self.max_iterations == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                reason: "must be at least 1 when set",
            });
        }

        Ok(SearchConfig {
            samples_per_state,
            seed: self.seed,
            max_iterations: self.max_iterations,
            chunk_size,
        })
    }
}
