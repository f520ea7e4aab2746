use isingmc::engine::config::{DEFAULT_CHUNK_SIZE, DEFAULT_SAMPLES_PER_STATE};
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub samples_per_state: u64,
    pub chunk_size: u64,
    pub output_directory: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            samples_per_state: DEFAULT_SAMPLES_PER_STATE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            output_directory: PathBuf::from("."),
        }
    }
}
